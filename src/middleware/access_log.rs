//! Access logging.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body, extract::ConnectInfo, http::Request, middleware::Next, response::Response,
};

use crate::middleware::request_id::X_REQUEST_ID;

/// Pipeline stage: one structured line per request: method, path, status,
/// latency, client address, request ID.
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    // Absent when the app is driven in-process rather than from a socket.
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        client = client.as_deref().unwrap_or("-"),
        request_id = %request_id,
        "request"
    );
    response
}
