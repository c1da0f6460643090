//! Request guard for bearer-token authentication.
//!
//! A request walks these stages in order and stops at the first failure:
//!
//! 1. token present: an `Authorization: Bearer <token>` header exists
//! 2. signature: the token was signed with our secret and is well formed
//! 3. expiry: `exp` (plus any configured leeway) has not passed
//!
//! Stages 2 and 3 are performed by [`JwtValidator`]. Nothing is retried; the
//! caller turns any error into an unauthorized response.

use crate::{AuthError, JwtValidator, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Identity resolved from a valid token, scoped to one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

#[derive(Clone)]
pub struct AccessGuard {
    validator: Arc<JwtValidator>,
}

impl AccessGuard {
    pub fn new(validator: Arc<JwtValidator>) -> Self {
        Self { validator }
    }

    /// Authenticate from the raw `Authorization` header value, if any
    #[track_caller]
    pub fn authenticate(&self, authorization: Option<&str>) -> AuthErrorResult<AuthenticatedUser> {
        let token = Self::bearer_token(authorization)?;

        let claims = self.validator.validate(token)?;
        let user_id = claims.user_id()?;

        Ok(AuthenticatedUser {
            user_id,
            email: claims.email,
        })
    }

    /// Extract the token from `Bearer <token>`; the scheme is case-insensitive
    #[track_caller]
    fn bearer_token(authorization: Option<&str>) -> AuthErrorResult<&str> {
        let header = authorization
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| AuthError::MissingHeader {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let (scheme, token) = header.split_once(' ').unwrap_or((header, ""));
        if !scheme.eq_ignore_ascii_case("Bearer") {
            return Err(AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::InvalidToken {
                message: "empty bearer token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(token)
    }
}
