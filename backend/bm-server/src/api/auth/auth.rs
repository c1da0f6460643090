//! Signup and signin handlers

use crate::{ApiResult, AppState, AuthRequest, JsonBody, TokenResponse};

use bm_core::{validate_email, validate_required_text};

use axum::{Json, extract::State, http::StatusCode};

/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AuthRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    validate_credentials(&req)?;
    state.rate_limiter.check(&req.email)?;

    let user = state.verifier.register(&req.email, &req.password).await?;
    let access_token = state.issuer.issue(&user)?;

    log::info!("Signup succeeded for user {}", user.id);

    Ok((StatusCode::CREATED, Json(TokenResponse { access_token })))
}

/// POST /auth/signin
pub async fn signin(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AuthRequest>,
) -> ApiResult<Json<TokenResponse>> {
    validate_credentials(&req)?;
    state.rate_limiter.check(&req.email)?;

    let user = state.verifier.authenticate(&req.email, &req.password).await?;
    let access_token = state.issuer.issue(&user)?;

    log::info!("Signin succeeded for user {}", user.id);

    Ok(Json(TokenResponse { access_token }))
}

fn validate_credentials(req: &AuthRequest) -> bm_core::Result<()> {
    validate_email(&req.email, "email")?;
    validate_required_text(&req.password, "password")
}
