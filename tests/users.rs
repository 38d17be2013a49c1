//! Mock user API tests: pagination, validation, synthesized records.

use axum::http::StatusCode;
use chrono::DateTime;
use serde_json::json;
use tower::ServiceExt;
use user_api::Environment;

mod common;

#[tokio::test]
async fn list_returns_mock_users_with_pagination() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .oneshot(common::get("/api/users?limit=10"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["pagination"]["total"], 2);
    assert_eq!(body["pagination"]["totalPages"], 1);
}

#[tokio::test]
async fn list_defaults_page_and_limit() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app.oneshot(common::get("/api/users")).await.unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
}

#[tokio::test]
async fn list_clamps_limit_into_range() {
    let app = common::test_app(Environment::Test, "not-set");

    let response = app
        .clone()
        .oneshot(common::get("/api/users?limit=1000"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["pagination"]["limit"], 100);

    let response = app
        .oneshot(common::get("/api/users?limit=0"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["pagination"]["limit"], 1);
    assert_eq!(body["pagination"]["totalPages"], 2);
}

#[tokio::test]
async fn list_ignores_garbage_parameters() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .oneshot(common::get("/api/users?page=abc&limit=xyz"))
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
}

#[tokio::test]
async fn duplicate_query_parameters_resolve_to_the_last_value() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .oneshot(common::get("/api/users?page=2&page=5"))
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["pagination"]["page"], 5);
}

#[tokio::test]
async fn create_returns_a_synthesized_record() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/users",
            &json!({ "email": "a@b.com", "name": "N", "password": "p" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = common::body_json(response).await;
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["name"], "N");
    assert_eq!(body["role"], "user");
    assert!(body["id"].as_str().unwrap().starts_with("user-"));
    // createdAt must be valid ISO 8601.
    let created_at = body["createdAt"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(created_at).is_ok(), "{created_at}");
}

#[tokio::test]
async fn create_honors_an_explicit_role() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/users",
            &json!({ "email": "a@b.com", "name": "N", "password": "p", "role": "admin" }),
        ))
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn create_requires_all_fields() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/users",
            &json!({ "name": "N", "password": "p" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::body_json(response).await,
        json!({ "error": "Email, name, and password are required" })
    );
}

#[tokio::test]
async fn create_rejects_empty_field_values() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/users",
            &json!({ "email": "", "name": "N", "password": "p" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::body_json(response).await,
        json!({ "error": "Email, name, and password are required" })
    );
}

#[tokio::test]
async fn create_rejects_invalid_email() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/users",
            &json!({ "email": "bad", "name": "N", "password": "p" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::body_json(response).await,
        json!({ "error": "Invalid email format" })
    );
}

#[tokio::test]
async fn create_rejects_malformed_json() {
    let app = common::test_app(Environment::Test, "not-set");
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::body_json(response).await,
        json!({ "error": "Malformed JSON body" })
    );
}

#[tokio::test]
async fn create_without_json_content_type_sees_no_body() {
    let app = common::test_app(Environment::Test, "not-set");
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "text/plain")
        .body(axum::body::Body::from(
            r#"{"email":"a@b.com","name":"N","password":"p"}"#,
        ))
        .unwrap();

    // The decoder skips non-JSON content types, so the handler sees no
    // fields and rejects.
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::body_json(response).await,
        json!({ "error": "Email, name, and password are required" })
    );
}

#[tokio::test]
async fn get_echoes_the_path_parameter() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .oneshot(common::get("/api/users/user-42"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["id"], "user-42");
    assert_eq!(body["email"], "user@example.com");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn update_echoes_provided_fields() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .oneshot(common::json_request(
            "PUT",
            "/api/users/user-42",
            &json!({ "name": "Renamed", "role": "admin" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["id"], "user-42");
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn update_without_fields_falls_back_to_defaults() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .oneshot(common::json_request("PUT", "/api/users/user-42", &json!({})))
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["name"], "DefaultUser");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn delete_returns_204_with_empty_body() {
    let app = common::test_app(Environment::Test, "not-set");
    let request = axum::http::Request::builder()
        .method("DELETE")
        .uri("/api/users/user-42")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(common::body_string(response).await.is_empty());
}

#[tokio::test]
async fn created_records_are_not_stored() {
    let app = common::test_app(Environment::Test, "not-set");
    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/users",
            &json!({ "email": "a@b.com", "name": "N", "password": "p" }),
        ))
        .await
        .unwrap();
    let created = common::body_json(response).await;
    let id = created["id"].as_str().unwrap();

    // A follow-up GET fabricates a record; the created name is gone.
    let response = app
        .oneshot(common::get(&format!("/api/users/{id}")))
        .await
        .unwrap();
    let fetched = common::body_json(response).await;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["name"], "DefaultUser");
}
