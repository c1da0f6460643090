//! User profile handlers

use crate::{ApiResult, AppState, CurrentUser, EditUserRequest, JsonBody, UserDto};

use bm_core::{validate_email, validate_optional_text};

use axum::{Json, extract::State};

/// GET /users/me
pub async fn get_me(CurrentUser(user): CurrentUser) -> ApiResult<Json<UserDto>> {
    Ok(Json(user.into()))
}

/// PATCH /users
///
/// Absent fields are left untouched. Taking another user's email is a 409.
pub async fn edit_user(
    State(state): State<AppState>,
    CurrentUser(mut user): CurrentUser,
    JsonBody(req): JsonBody<EditUserRequest>,
) -> ApiResult<Json<UserDto>> {
    if let Some(email) = &req.email {
        validate_email(email, "email")?;
    }
    validate_optional_text(req.first_name.as_deref(), "firstName")?;
    validate_optional_text(req.last_name.as_deref(), "lastName")?;

    user.apply_profile_edit(req.email, req.first_name, req.last_name);
    state.users.update(&user).await?;

    log::info!("Updated profile of user {}", user.id);

    Ok(Json(user.into()))
}
