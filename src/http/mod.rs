//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware pipeline, dispatch)
//!     → request.rs (context assembly: query, headers, decoded body)
//!     → [routing + authorization gate + handler]
//!     → response.rs (error taxonomy, JSON error bodies)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::RequestContext;
pub use response::ApiError;
pub use server::{AppState, HttpServer};
