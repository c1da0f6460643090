use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;

/// Clock skew tolerance in seconds when the issuer shares our clock
pub const DEFAULT_LEEWAY_SECS: u64 = 0;

/// Verifies HS256 tokens minted by [`crate::JwtIssuer`] with the same secret.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::with_hs256_and_leeway(secret, DEFAULT_LEEWAY_SECS)
    }

    pub fn with_hs256_and_leeway(secret: &[u8], leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = leeway_secs;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate JWT token and return claims.
    ///
    /// The signature is checked before any claim, so a tampered token is
    /// always `InvalidToken`; only a genuine token past `exp` (plus leeway)
    /// yields `TokenExpired`.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::InvalidToken {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Additional claim validation
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Validate a token and resolve its subject to a user id
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Uuid> {
        self.validate(token)?.user_id()
    }
}
