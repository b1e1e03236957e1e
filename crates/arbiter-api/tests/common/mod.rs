//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use arbiter_api::auth;
use arbiter_api::routes;
use arbiter_api::state::{AppState, AuthKeys};

/// Secret shared by the test app and the tokens the tests mint.
pub const TEST_SECRET: &str = "test-secret";

/// Build the full app router with the token-issuance route mounted. Uses the
/// same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with_issue_flag(true)
}

/// Build the app router, choosing whether token issuance is mounted.
pub fn build_test_app_with_issue_flag(allow_token_issue: bool) -> Router {
    routes::router(allow_token_issue).with_state(AppState::new(TEST_SECRET))
}

/// Mint a bearer token for the given role, signed with the test secret.
pub fn bearer_token(role: Option<&str>) -> String {
    let keys = AuthKeys::from_secret(TEST_SECRET);
    auth::sign_token(
        &keys,
        Some("integration-test".to_string()),
        role.map(ToString::to_string),
        300,
    )
    .unwrap()
}

/// Send a POST request with a JSON body and optional bearer token; return
/// status and parsed JSON body.
pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    // Extractor rejections (e.g. axum's 422 for a missing field) have
    // plain-text bodies; fall back to Null so callers can still assert status.
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
