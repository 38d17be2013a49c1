//! User API service library.
//!
//! An HTTP service exposing operational endpoints (liveness, readiness,
//! configuration introspection, Prometheus metrics) and a mock user
//! management API guarded by a shared-secret key.

pub mod config;
pub mod docs;
pub mod handlers;
pub mod http;
pub mod middleware;
pub mod observability;
pub mod routing;
pub mod security;

pub use config::{AppConfig, Environment};
pub use http::HttpServer;
