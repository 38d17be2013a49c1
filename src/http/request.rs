//! Request context assembly.
//!
//! # Responsibilities
//! - Extract routing-relevant information (method, path, query, headers)
//! - Carry the decoded JSON body from the body-decoder stage to the handler
//! - Hold the bound path parameters once a route has matched

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request};
use serde_json::Value;

use crate::http::server::AppState;
use crate::middleware::body_decoder::JsonBody;

/// Everything a handler may inspect about a request. Assembled once at
/// dispatch, dropped with the response.
pub struct RequestContext<'a> {
    pub method: Method,
    pub path: String,
    /// Case-insensitive by construction (`http::HeaderMap`).
    pub headers: HeaderMap,
    /// Query parameters; duplicates resolve to the last value.
    pub query: HashMap<String, String>,
    /// Path parameters bound by the matched route pattern.
    pub params: HashMap<String, String>,
    /// Decoded JSON body, if the body-decoder stage attached one.
    pub body: Option<Value>,
    pub state: &'a AppState,
}

impl<'a> RequestContext<'a> {
    /// Build the context from the raw request. Path parameters stay empty
    /// until the dispatcher binds them from the matched route.
    pub fn from_request(request: &Request<Body>, state: &'a AppState) -> Self {
        Self {
            method: request.method().clone(),
            path: request.uri().path().to_string(),
            headers: request.headers().clone(),
            query: parse_query(request.uri().query()),
            params: HashMap::new(),
            body: request.extensions().get::<JsonBody>().map(|body| body.0.clone()),
            state,
        }
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Body field as a non-empty string. `None` when the body is absent,
    /// the field is missing, not a string, or empty.
    pub fn body_str(&self, field: &str) -> Option<&str> {
        self.body
            .as_ref()?
            .get(field)?
            .as_str()
            .filter(|value| !value.is_empty())
    }
}

/// Decode the query string into a map, last value winning on duplicates.
fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    let Some(query) = query else {
        return HashMap::new();
    };
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}
