//! Shared helpers for the integration suites.

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;

use user_api::{AppConfig, Environment, HttpServer};

/// Build the application with the given environment and API key, without
/// binding a socket.
#[allow(dead_code)]
pub fn test_app(environment: Environment, api_key: &str) -> Router {
    let config = AppConfig {
        environment,
        api_key: api_key.to_string(),
        ..AppConfig::default()
    };
    HttpServer::new(config).app()
}

/// Collect a response body into a string.
#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_string(response).await).expect("JSON body")
}

/// Convenience GET request.
#[allow(dead_code)]
pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request")
}

/// Convenience request with a JSON body.
#[allow(dead_code)]
pub fn json_request(method: &str, path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}
