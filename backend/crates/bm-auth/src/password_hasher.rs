use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier as _, Version};
use error_location::ErrorLocation;

/// Salted Argon2id password hashing, producing PHC strings.
///
/// Hashing is CPU-bound; async callers should run it on the
/// blocking pool.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Argon2id with explicit cost parameters
    #[track_caller]
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> AuthErrorResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            AuthError::Hashing {
                message: format!("Invalid Argon2 parameters: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh 16-byte salt
    #[track_caller]
    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let mut salt_bytes = [0u8; 16];
        getrandom::getrandom(&mut salt_bytes).map_err(|e| AuthError::Hashing {
            message: format!("Failed to gather salt: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::Hashing {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let phc = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string();

        Ok(phc)
    }

    /// Check a password against a stored PHC string. Malformed hashes never match.
    pub fn verify(&self, password: &str, phc: &str) -> bool {
        match PasswordHash::new(phc) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}
