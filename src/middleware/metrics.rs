//! Request metrics instrumentation.

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};

use crate::observability::metrics::record_request;

/// Route template attached to the response by the dispatcher, so metrics
/// label on the registered pattern rather than the concrete path.
#[derive(Debug, Clone)]
pub struct MatchedRoute(pub String);

/// Pipeline stage: time the rest of the chain and record one observation
/// per request. Requests that matched no route are labelled `unmatched` to
/// keep label cardinality bounded.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    let route = response
        .extensions()
        .get::<MatchedRoute>()
        .map(|matched| matched.0.clone())
        .unwrap_or_else(|| "unmatched".to_string());
    record_request(&method, &route, response.status().as_u16(), started);
    response
}
