//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Pipeline stages produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms, exposition handle)
//!
//! Consumers:
//!     → Log aggregation (stdout; JSON in production)
//!     → GET /metrics (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the request ID appears on every line
//! - Metric updates are cheap atomic increments; safe under concurrent
//!   requests with no locks in the pipeline

pub mod logging;
pub mod metrics;
