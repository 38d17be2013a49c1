//! Mock user resource handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;

use crate::http::request::RequestContext;
use crate::http::response::ApiError;

/// A user record as the API presents it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: String,
}

const DEFAULT_EMAIL: &str = "user@example.com";
const DEFAULT_NAME: &str = "DefaultUser";
const DEFAULT_ROLE: &str = "user";
const MOCK_CREATED_AT: &str = "2024-01-01T00:00:00Z";

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 100;

/// The fixed illustrative data set.
fn mock_users() -> Vec<User> {
    vec![
        User {
            id: "user-1".to_string(),
            email: DEFAULT_EMAIL.to_string(),
            name: DEFAULT_NAME.to_string(),
            role: DEFAULT_ROLE.to_string(),
            created_at: MOCK_CREATED_AT.to_string(),
        },
        User {
            id: "admin-1".to_string(),
            email: "admin@example.com".to_string(),
            name: "SystemAdmin".to_string(),
            role: "admin".to_string(),
            created_at: MOCK_CREATED_AT.to_string(),
        },
    ]
}

/// `GET /api/users`: the mock set plus pagination metadata.
///
/// `limit` is clamped to [1, 100] and `page` floored at 1; non-numeric
/// values fall back to the defaults rather than erroring.
pub fn list(ctx: &RequestContext<'_>) -> Response {
    let page = parse_param(ctx.query_param("page"), DEFAULT_PAGE).max(1);
    let limit = parse_param(ctx.query_param("limit"), DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let users = mock_users();
    let total = users.len();
    let total_pages = total.div_ceil(limit);

    Json(json!({
        "users": users,
        "pagination": {
            "page": page,
            "limit": limit,
            "total": total,
            "totalPages": total_pages,
        },
    }))
    .into_response()
}

/// `POST /api/users`: validate the payload and echo back a synthesized
/// record. Nothing is stored.
pub fn create(ctx: &RequestContext<'_>) -> Response {
    let (Some(email), Some(name), Some(_password)) = (
        ctx.body_str("email"),
        ctx.body_str("name"),
        ctx.body_str("password"),
    ) else {
        return ApiError::Validation("Email, name, and password are required".to_string())
            .into_response();
    };

    if !email.contains('@') {
        return ApiError::Validation("Invalid email format".to_string()).into_response();
    }

    let now = Utc::now();
    let user = User {
        id: format!("user-{}", now.timestamp_millis()),
        email: email.to_string(),
        name: name.to_string(),
        role: ctx.body_str("role").unwrap_or(DEFAULT_ROLE).to_string(),
        created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    (StatusCode::CREATED, Json(user)).into_response()
}

/// `GET /api/users/:userId`: a synthesized record for the requested ID.
pub fn get(ctx: &RequestContext<'_>) -> Response {
    let user = User {
        id: ctx.path_param("userId").unwrap_or_default().to_string(),
        email: DEFAULT_EMAIL.to_string(),
        name: DEFAULT_NAME.to_string(),
        role: DEFAULT_ROLE.to_string(),
        created_at: MOCK_CREATED_AT.to_string(),
    };
    Json(user).into_response()
}

/// `PUT /api/users/:userId`: echo the ID and any provided update fields.
pub fn update(ctx: &RequestContext<'_>) -> Response {
    let user = User {
        id: ctx.path_param("userId").unwrap_or_default().to_string(),
        email: DEFAULT_EMAIL.to_string(),
        name: ctx.body_str("name").unwrap_or(DEFAULT_NAME).to_string(),
        role: ctx.body_str("role").unwrap_or(DEFAULT_ROLE).to_string(),
        created_at: MOCK_CREATED_AT.to_string(),
    };
    Json(user).into_response()
}

/// `DELETE /api/users/:userId`: 204 with empty body, unconditionally;
/// there is no store to consult.
pub fn delete(_ctx: &RequestContext<'_>) -> Response {
    StatusCode::NO_CONTENT.into_response()
}

fn parse_param(value: Option<&str>, default: usize) -> usize {
    value.and_then(|raw| raw.parse().ok()).unwrap_or(default)
}
