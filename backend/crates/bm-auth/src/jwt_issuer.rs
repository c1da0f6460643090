use crate::{AuthError, Claims, Result as AuthErrorResult};

use bm_core::User;

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Mints HS256 access tokens bound to a user id.
///
/// The secret is handed in at construction so separate issuers (and tests)
/// can use distinct keys.
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Expiry window applied to every token
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, user: &User) -> AuthErrorResult<String> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token as if minted at `issued_at`
    #[track_caller]
    pub fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> AuthErrorResult<String> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat,
            exp: iat.saturating_add(self.ttl.as_secs() as i64),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|source| AuthError::Signing {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
