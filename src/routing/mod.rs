//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, path)
//!     → router.rs (ordered lookup)
//!     → pattern.rs (segment matching, parameter binding)
//!     → Return: matched RouteEntry + params, or no-match (404)
//!
//! Route compilation (at startup):
//!     handlers::routes()
//!     → Router::register(method, pattern, auth policy, handler)
//!     → Freeze as immutable table behind Arc
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - First match wins, in registration order
//! - Matching is method-specific: a known path under the wrong method is a
//!   no-match (404), mirroring per-method registration

pub mod pattern;
pub mod router;

pub use pattern::PathPattern;
pub use router::{AuthPolicy, HandlerFn, RouteEntry, RouteMatch, Router};
