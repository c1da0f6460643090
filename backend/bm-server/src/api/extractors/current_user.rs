//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use bm_core::User;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

/// The authenticated caller, loaded fresh from the store for this request.
///
/// Rejects with 401 when the token is missing, malformed, forged or expired,
/// and when its subject no longer exists.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let identity = state.guard.authenticate(header)?;

            let user = state
                .users
                .find_by_id(identity.user_id)
                .await?
                .ok_or_else(|| {
                    log::warn!("Token subject {} no longer exists", identity.user_id);
                    ApiError::Unauthorized {
                        message: "Invalid token".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;

            log::debug!("Authenticated user {}", user.id);
            Ok(CurrentUser(user))
        }
    }
}
