//! Response construction and the request-level error taxonomy.
//!
//! # Design Decisions
//! - Every request-level failure is a value returned to the caller; nothing
//!   here can terminate the process
//! - All error bodies share the `{"error": <message>}` shape

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Everything a request can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The authorization gate rejected the credential.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// A handler rejected the request payload.
    #[error("{0}")]
    Validation(String),

    /// The body decoder could not parse the JSON payload.
    #[error("Malformed JSON body")]
    MalformedBody,

    /// The body exceeded the decoder's size cap.
    #[error("Request body too large")]
    BodyTooLarge,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) | ApiError::MalformedBody => StatusCode::BAD_REQUEST,
            ApiError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::InvalidApiKey.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Validation("nope".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::MalformedBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::BodyTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(ApiError::InvalidApiKey.to_string(), "Invalid API key");
        assert_eq!(
            ApiError::Validation("Invalid email format".into()).to_string(),
            "Invalid email format"
        );
    }
}
