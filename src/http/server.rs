//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Assemble the Axum router: one catch-all route feeding the in-crate
//!   dispatcher, wrapped by the fixed middleware pipeline
//! - Hold the shared application state (config, route table, CORS policy,
//!   metrics handle)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Pipeline
//! ```text
//! CORS → metrics → request ID → access log → body decoder
//!      → dispatch (route match → authorization gate → handler)
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::{from_fn, from_fn_with_state},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers;
use crate::http::request::RequestContext;
use crate::http::response::ApiError;
use crate::middleware::cors::CorsPolicy;
use crate::middleware::metrics::MatchedRoute;
use crate::middleware::{access_log, body_decoder, cors, metrics as metrics_stage, request_id};
use crate::observability;
use crate::routing::{AuthPolicy, Router as RouteTable};
use crate::security::{authorize, Decision};

/// Application state injected into the pipeline and handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub routes: Arc<RouteTable>,
    pub cors: Arc<CorsPolicy>,
    pub metrics: PrometheusHandle,
}

/// HTTP server for the user API.
pub struct HttpServer {
    app: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState {
            cors: Arc::new(CorsPolicy::for_environment(config.environment)),
            routes: Arc::new(handlers::routes()),
            metrics: observability::metrics::init(),
            config: Arc::new(config.clone()),
        };

        let app = Self::build_router(state);
        Self { app, config }
    }

    /// Build the Axum router with the fixed middleware pipeline.
    ///
    /// Layers added last run first, so the chain reads bottom-up: CORS is
    /// outermost and the body decoder sits directly above dispatch.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(from_fn(body_decoder::decode_json_body))
            .layer(from_fn(access_log::log_requests))
            .layer(from_fn(request_id::propagate_request_id))
            .layer(from_fn(metrics_stage::track_requests))
            .layer(from_fn_with_state(state, cors::apply_cors))
    }

    /// The assembled application, for in-process testing and `serve`.
    pub fn app(&self) -> Router {
        self.app.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.config.environment,
            "HTTP server starting"
        );

        let app = self.app.into_make_service_with_connect_info::<SocketAddr>();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Terminal pipeline stage: match a route, run the authorization gate for
/// protected routes, invoke the handler.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let mut ctx = RequestContext::from_request(&request, &state);

    let Some(matched) = state.routes.lookup(&ctx.method, &ctx.path) else {
        tracing::debug!(method = %ctx.method, path = %ctx.path, "No route matched");
        return StatusCode::NOT_FOUND.into_response();
    };
    let template = matched.entry.template().to_string();

    if matched.entry.auth() == AuthPolicy::ApiKey {
        let presented = ctx
            .headers
            .get("x-api-key")
            .and_then(|value| value.to_str().ok());
        if authorize(state.config.environment, presented, &state.config.api_key) == Decision::Deny {
            observability::metrics::record_auth_failure();
            tracing::warn!(method = %ctx.method, path = %ctx.path, "API key rejected");
            let mut response = ApiError::InvalidApiKey.into_response();
            response.extensions_mut().insert(MatchedRoute(template));
            return response;
        }
    }

    ctx.params = matched.params;
    let mut response = matched.entry.handle(&ctx);
    response.extensions_mut().insert(MatchedRoute(template));
    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
