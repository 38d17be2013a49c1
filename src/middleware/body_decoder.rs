//! JSON body decoding.
//!
//! # Design Decisions
//! - Only `application/json` requests are buffered and parsed; anything
//!   else passes through and handlers treat the body as absent
//! - Malformed JSON is rejected with 400 before any handler runs,
//!   oversized bodies with 413

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::http::response::ApiError;

/// Decoded request body, attached as a request extension for the
/// dispatcher to hand to the matched handler.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

/// Largest body the decoder accepts.
const BODY_LIMIT: usize = 100 * 1024;

/// Pipeline stage: buffer JSON request bodies, parse them into a generic
/// value, and attach the value to the request.
pub async fn decode_json_body(request: Request<Body>, next: Next) -> Response {
    if !is_json(request.headers().get(header::CONTENT_TYPE)) {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(_) => return ApiError::BodyTooLarge.into_response(),
    };

    if !bytes.is_empty() {
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => {
                parts.extensions.insert(JsonBody(value));
            }
            Err(_) => return ApiError::MalformedBody.into_response(),
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn is_json(content_type: Option<&HeaderValue>) -> bool {
    content_type
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(value: &str) -> HeaderValue {
        HeaderValue::from_str(value).unwrap()
    }

    #[test]
    fn json_content_types() {
        assert!(is_json(Some(&header("application/json"))));
        assert!(is_json(Some(&header("application/json; charset=utf-8"))));
        assert!(is_json(Some(&header("Application/JSON"))));
    }

    #[test]
    fn non_json_content_types() {
        assert!(!is_json(None));
        assert!(!is_json(Some(&header("text/plain"))));
        assert!(!is_json(Some(&header("application/x-www-form-urlencoded"))));
    }
}
