//! The fixed request pipeline.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (preflight short-circuit, origin negotiation)
//!     → metrics.rs (start timer, record on the way out)
//!     → request_id.rs (assign/propagate x-request-id)
//!     → access_log.rs (one structured line per request)
//!     → body_decoder.rs (parse JSON bodies, reject malformed)
//!     → dispatch (routing + authorization gate + handler)
//! ```
//!
//! # Design Decisions
//! - Stages are plain async functions composed with `axum::middleware::from_fn`;
//!   the chain is fixed at router construction, never rebuilt per request
//! - No stage after the handler mutates the response body; outer stages only
//!   append headers and read response extensions

pub mod access_log;
pub mod body_decoder;
pub mod cors;
pub mod metrics;
pub mod request_id;
