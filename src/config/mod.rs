//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (NODE_ENV, APP_GREETING, API_KEY, PORT)
//!     → loader.rs (read & parse)
//!     → AppConfig (immutable)
//!     → shared via Arc to the pipeline and handlers
//! ```
//!
//! # Design Decisions
//! - Config is resolved exactly once at startup; nothing re-reads the
//!   environment per request
//! - Every variable has a default so the service starts with an empty
//!   environment; only a malformed PORT is a startup error
//! - The API key default is an explicit sentinel, never the empty string

pub mod loader;
pub mod schema;

pub use loader::{from_env, ConfigError};
pub use schema::{AppConfig, Environment, API_KEY_UNSET};
