//! Request ID propagation.

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Pipeline stage: ensure every request carries an ID and echo it on the
/// response. Inbound IDs are preserved so callers can correlate.
pub async fn propagate_request_id(mut request: Request<Body>, next: Next) -> Response {
    let id = match request.headers().get(X_REQUEST_ID) {
        Some(value) => value.clone(),
        None => {
            let generated = Uuid::new_v4().to_string();
            match HeaderValue::from_str(&generated) {
                Ok(value) => value,
                Err(_) => return next.run(request).await,
            }
        }
    };

    request.headers_mut().insert(X_REQUEST_ID, id.clone());
    let mut response = next.run(request).await;
    response.headers_mut().insert(X_REQUEST_ID, id);
    response
}
