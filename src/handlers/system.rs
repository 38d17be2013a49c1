//! Operational endpoints: greeting, health, readiness, config, metrics.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::http::request::RequestContext;

/// `GET /`: the configured greeting, as plain text.
pub fn root(ctx: &RequestContext<'_>) -> Response {
    ctx.state.config.greeting.clone().into_response()
}

/// `GET /healthz`: liveness probe. Unconditional; no authorization.
pub fn healthz(_ctx: &RequestContext<'_>) -> Response {
    Json(json!({ "status": "ok" })).into_response()
}

/// `GET /readyz`: readiness probe.
pub fn readyz(_ctx: &RequestContext<'_>) -> Response {
    Json(json!({ "status": "ready" })).into_response()
}

/// `GET /config`: the environment-derived settings, exactly as loaded.
pub fn config_introspection(ctx: &RequestContext<'_>) -> Response {
    let config = &ctx.state.config;
    Json(json!({
        "APP_GREETING": config.greeting,
        "API_KEY": config.api_key,
    }))
    .into_response()
}

/// `GET /metrics`: Prometheus exposition snapshot. Always available,
/// regardless of authorization.
pub fn metrics_snapshot(ctx: &RequestContext<'_>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        ctx.state.metrics.render(),
    )
        .into_response()
}
