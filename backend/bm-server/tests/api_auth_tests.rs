//! Integration tests for signup/signin and the access guard

mod common;

use crate::common::{
    TEST_SECRET, create_test_app_state, create_test_app_state_with_rate_limit, send,
    send_request, signup,
};

use bm_auth::{JwtValidator, RateLimitConfig};

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::json;

#[tokio::test]
async fn test_signup_returns_201_with_verifiable_token() {
    let state = create_test_app_state().await;

    let (status, json) = send(
        &state,
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": "a@x.com", "password": "pw1" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let token = json["access_token"].as_str().unwrap();
    let user_id = JwtValidator::with_hs256(TEST_SECRET.as_bytes())
        .verify(token)
        .unwrap();
    let stored = state.users.find_by_id(user_id).await.unwrap().unwrap();
    assert_eq!(stored.email, "a@x.com");
}

#[tokio::test]
async fn test_signup_duplicate_email_returns_403_credentials_taken() {
    let state = create_test_app_state().await;
    signup(&state, "a@x.com", "pw1").await;

    let (status, json) = send(
        &state,
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": "a@x.com", "password": "other" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "CREDENTIALS_TAKEN");
}

#[tokio::test]
async fn test_signup_rejects_missing_or_invalid_fields() {
    let state = create_test_app_state().await;

    let bodies = vec![
        (json!({ "password": "pw1" }), "email"),
        (json!({ "email": "", "password": "pw1" }), "email"),
        (json!({ "email": "not-an-email", "password": "pw1" }), "email"),
        (json!({ "email": "a@x.com" }), "password"),
        (json!({ "email": "a@x.com", "password": "" }), "password"),
    ];

    for (body, field) in bodies {
        let (status, json) = send(&state, "POST", "/auth/signup", None, Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["field"], field);
    }
}

#[tokio::test]
async fn test_signup_without_body_returns_400() {
    let state = create_test_app_state().await;

    let (status, json) = send(&state, "POST", "/auth/signup", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_signup_with_malformed_json_returns_400() {
    let state = create_test_app_state().await;
    let request = Request::builder()
        .method("POST")
        .uri("/auth/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"email\": "))
        .unwrap();

    let (status, _) = send_request(&state, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signin_returns_200_with_token_for_same_user() {
    let state = create_test_app_state().await;
    let signup_token = signup(&state, "a@x.com", "pw1").await;

    let (status, json) = send(
        &state,
        "POST",
        "/auth/signin",
        None,
        Some(json!({ "email": "a@x.com", "password": "pw1" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let validator = JwtValidator::with_hs256(TEST_SECRET.as_bytes());
    let signin_id = validator
        .verify(json["access_token"].as_str().unwrap())
        .unwrap();
    let signup_id = validator.verify(&signup_token).unwrap();
    assert_eq!(signin_id, signup_id);
}

#[tokio::test]
async fn test_signin_wrong_password_and_unknown_email_are_indistinguishable() {
    let state = create_test_app_state().await;
    signup(&state, "a@x.com", "pw1").await;

    let (wrong_status, wrong_json) = send(
        &state,
        "POST",
        "/auth/signin",
        None,
        Some(json!({ "email": "a@x.com", "password": "nope" })),
    )
    .await;
    let (unknown_status, unknown_json) = send(
        &state,
        "POST",
        "/auth/signin",
        None,
        Some(json!({ "email": "nobody@x.com", "password": "pw1" })),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::FORBIDDEN);
    assert_eq!(unknown_status, StatusCode::FORBIDDEN);
    assert_eq!(wrong_json, unknown_json);
    assert_eq!(wrong_json["error"]["code"], "CREDENTIALS_INCORRECT");
}

#[tokio::test]
async fn test_signin_attempts_beyond_limit_return_429() {
    let state = create_test_app_state_with_rate_limit(RateLimitConfig {
        max_requests: 2,
        window_secs: 60,
    })
    .await;
    let body = json!({ "email": "a@x.com", "password": "nope" });

    let (first, _) = send(&state, "POST", "/auth/signin", None, Some(body.clone())).await;
    let (second, _) = send(&state, "POST", "/auth/signin", None, Some(body.clone())).await;
    let (third, json) = send(&state, "POST", "/auth/signin", None, Some(body)).await;

    assert_eq!(first, StatusCode::FORBIDDEN);
    assert_eq!(second, StatusCode::FORBIDDEN);
    assert_eq!(third, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_guarded_route_without_token_returns_401() {
    let state = create_test_app_state().await;

    let (status, json) = send(&state, "GET", "/users/me", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_guarded_route_with_wrong_scheme_returns_401() {
    let state = create_test_app_state().await;
    let token = signup(&state, "a@x.com", "pw1").await;
    let request = Request::builder()
        .method("GET")
        .uri("/users/me")
        .header(header::AUTHORIZATION, format!("Token {}", token))
        .body(Body::empty())
        .unwrap();

    let (status, _) = send_request(&state, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guarded_route_with_tampered_token_returns_401() {
    let state = create_test_app_state().await;
    let token = signup(&state, "a@x.com", "pw1").await;
    let mut tampered = token.into_bytes();
    let last = tampered.len() - 2;
    tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered).unwrap();

    let (status, _) = send(&state, "GET", "/users/me", Some(&tampered), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_returns_401() {
    let state = create_test_app_state().await;
    let other = create_test_app_state().await;
    let foreign_issuer = bm_auth::JwtIssuer::with_hs256(
        b"some-other-secret-key-of-32-bytes!!",
        std::time::Duration::from_secs(900),
    );
    let token = signup(&other, "a@x.com", "pw1").await;
    let user_id = JwtValidator::with_hs256(TEST_SECRET.as_bytes())
        .verify(&token)
        .unwrap();
    let user = other.users.find_by_id(user_id).await.unwrap().unwrap();
    let forged = foreign_issuer.issue(&user).unwrap();

    let (status, _) = send(&state, "GET", "/users/me", Some(&forged), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_for_unknown_user_returns_401() {
    let state = create_test_app_state().await;
    let other = create_test_app_state().await;
    let token = signup(&other, "ghost@x.com", "pw1").await;

    let (status, _) = send(&state, "GET", "/users/me", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_endpoints_report_ready() {
    let state = create_test_app_state().await;

    let (live, _) = send(&state, "GET", "/live", None, None).await;
    let (ready, _) = send(&state, "GET", "/ready", None, None).await;
    let (health, json) = send(&state, "GET", "/health", None, None).await;

    assert_eq!(live, StatusCode::OK);
    assert_eq!(ready, StatusCode::OK);
    assert_eq!(health, StatusCode::OK);
    assert_eq!(json["components"]["database"], "operational");
}
