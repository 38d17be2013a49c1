//! CORS negotiation.
//!
//! # Design Decisions
//! - The policy is computed once from the environment at startup: reflect
//!   any origin outside production, exact-match allow-list in production
//! - OPTIONS requests short-circuit the entire pipeline with 200 and no
//!   body, before the authorization gate runs
//! - A disallowed origin gets no origin/credentials headers; the request
//!   itself is not rejected (CORS is advisory at the header level)

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::Environment;
use crate::http::server::AppState;

/// Methods advertised on preflight responses.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Headers a caller may send cross-origin.
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization, X-API-Key";

/// Origins accepted in production.
const PRODUCTION_ORIGINS: &[&str] = &["https://api.example.com", "https://yourdomain.com"];

/// Origin policy derived from the environment at startup.
#[derive(Debug, Clone)]
pub enum CorsPolicy {
    /// Reflect whatever origin the caller presents (non-production).
    Reflect,
    /// Exact-match allow-list (production).
    AllowList(Vec<String>),
}

impl CorsPolicy {
    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            CorsPolicy::AllowList(PRODUCTION_ORIGINS.iter().map(|s| s.to_string()).collect())
        } else {
            CorsPolicy::Reflect
        }
    }

    /// The origin to echo back, if the presented one is permitted.
    pub fn permitted_origin<'a>(&self, origin: Option<&'a str>) -> Option<&'a str> {
        let origin = origin?;
        match self {
            CorsPolicy::Reflect => Some(origin),
            CorsPolicy::AllowList(allowed) => {
                allowed.iter().any(|entry| entry == origin).then_some(origin)
            }
        }
    }

    /// Stamp negotiation headers onto a response. Origin and credentials
    /// headers are omitted entirely when the origin is not permitted.
    fn write_headers(&self, headers: &mut HeaderMap, origin: Option<&str>) {
        headers.insert(header::VARY, HeaderValue::from_static("Origin"));
        if let Some(origin) = self.permitted_origin(origin) {
            if let Ok(value) = HeaderValue::from_str(origin) {
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    HeaderValue::from_static("true"),
                );
            }
        }
    }

    /// Preflight adds the advertised method and header sets.
    fn write_preflight_headers(&self, headers: &mut HeaderMap, origin: Option<&str>) {
        self.write_headers(headers, origin);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
    }
}

/// Pipeline stage: answer preflights outright, stamp negotiation headers on
/// every other response.
pub async fn apply_cors(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        state
            .cors
            .write_preflight_headers(response.headers_mut(), origin.as_deref());
        return response;
    }

    let mut response = next.run(request).await;
    state
        .cors
        .write_headers(response.headers_mut(), origin.as_deref());
    response
}
