//! Concurrent dispatch must not lose metric increments.
//!
//! Kept as its own binary so no other test touches the shared recorder's
//! `/healthz` counters while the delta is measured.

use axum::http::StatusCode;
use axum::Router;
use tower::ServiceExt;
use user_api::Environment;

mod common;

/// Sum the `http_requests_total` samples for `GET /healthz` with status 200
/// out of the exposition text.
async fn healthz_request_count(app: &Router) -> u64 {
    let response = app
        .clone()
        .oneshot(common::get("/metrics"))
        .await
        .expect("metrics response");
    let body = common::body_string(response).await;

    body.lines()
        .filter(|line| {
            line.starts_with("http_requests_total{")
                && line.contains(r#"method="GET""#)
                && line.contains(r#"route="/healthz""#)
                && line.contains(r#"status="200""#)
        })
        .filter_map(|line| line.rsplit(' ').next())
        .filter_map(|value| value.parse::<u64>().ok())
        .sum()
}

#[tokio::test]
async fn concurrent_healthz_requests_increment_the_counter_exactly_n() {
    let app = common::test_app(Environment::Test, "not-set");
    let before = healthz_request_count(&app).await;

    const N: usize = 50;
    let responses = futures::future::join_all((0..N).map(|_| {
        let app = app.clone();
        async move { app.oneshot(common::get("/healthz")).await.expect("response") }
    }))
    .await;

    for response in responses {
        assert_eq!(response.status(), StatusCode::OK);
    }

    let after = healthz_request_count(&app).await;
    assert_eq!(after - before, N as u64);
}
