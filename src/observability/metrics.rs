//! Metrics registry and Prometheus exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, route, status
//! - `http_request_duration_seconds` (histogram): latency by method, route
//! - `http_auth_failures_total` (counter): credentials the gate rejected
//! - `process_start_time_seconds` (gauge): set once at startup, so the
//!   exposition always carries at least one family

use std::sync::OnceLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use metrics::{
    counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram, Unit,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global recorder and return the exposition handle.
///
/// Idempotent: the recorder is process-wide, so repeated server
/// constructions (tests) share one registry.
pub fn init() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus metrics recorder");

            describe_counter!(
                "http_requests_total",
                "Total HTTP requests handled, by method, route, and status"
            );
            describe_histogram!(
                "http_request_duration_seconds",
                Unit::Seconds,
                "HTTP request latency, by method and route"
            );
            describe_counter!(
                "http_auth_failures_total",
                "Requests rejected by the API key gate"
            );
            describe_gauge!(
                "process_start_time_seconds",
                "Unix time the process started, in seconds"
            );

            let started = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs_f64())
                .unwrap_or(0.0);
            gauge!("process_start_time_seconds").set(started);

            handle
        })
        .clone()
}

/// Record one completed request against the route template.
pub fn record_request(method: &str, route: &str, status: u16, started: Instant) {
    counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string(),
    )
    .record(started.elapsed().as_secs_f64());
}

/// Count a credential rejected by the authorization gate.
pub fn record_auth_failure() {
    counter!("http_auth_failures_total").increment(1);
}
