#![allow(dead_code)]

//! Test infrastructure for bm-server API tests

use bm_auth::{PasswordHasher, RateLimitConfig};
use bm_server::{AppState, AuthSettings, build_router};

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "api-test-secret-key-at-least-32-bytes";

/// Create AppState over a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_rate_limit(RateLimitConfig {
        max_requests: 1000,
        window_secs: 60,
    })
    .await
}

pub async fn create_test_app_state_with_rate_limit(rate_limit: RateLimitConfig) -> AppState {
    let pool = bm_db::open_in_memory_pool()
        .await
        .expect("Failed to create test database");

    AppState::new(
        pool,
        AuthSettings {
            jwt_secret: TEST_SECRET.as_bytes().to_vec(),
            token_ttl: Duration::from_secs(15 * 60),
            leeway_secs: 0,
            hasher: PasswordHasher::with_params(1024, 1, 1).expect("Failed to build hasher"),
            rate_limit,
        },
    )
    .expect("Failed to build app state")
}

/// Send one request through a fresh router; returns status and JSON body
/// (`Value::Null` when the body is empty)
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(state, request).await
}

pub async fn send_request(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Sign up and return the access token
pub async fn signup(state: &AppState, email: &str, password: &str) -> String {
    let (status, json) = send(
        state,
        "POST",
        "/auth/signup",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {json}");

    json["access_token"].as_str().unwrap().to_string()
}

/// Create a bookmark for the token's owner and return its id
pub async fn create_bookmark(state: &AppState, token: &str, title: &str, link: &str) -> String {
    let (status, json) = send(
        state,
        "POST",
        "/bookmarks",
        Some(token),
        Some(serde_json::json!({ "title": title, "link": link })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create bookmark failed: {json}");

    json["id"].as_str().unwrap().to_string()
}
