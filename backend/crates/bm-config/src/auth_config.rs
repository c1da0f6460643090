use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ARGON2_ITERATIONS, DEFAULT_ARGON2_MEMORY_KIB,
    DEFAULT_ARGON2_PARALLELISM, DEFAULT_LEEWAY_SECS, DEFAULT_TOKEN_TTL_SECS,
    MAX_ARGON2_ITERATIONS, MAX_ARGON2_MEMORY_KIB, MAX_ARGON2_PARALLELISM, MAX_LEEWAY_SECS,
    MAX_TOKEN_TTL_SECS, MIN_ARGON2_MEMORY_KIB, MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Token signing and password hashing settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; never logged.
    pub jwt_secret: Option<String>,
    /// Lifetime of issued access tokens
    pub token_ttl_secs: u64,
    /// Clock skew tolerated when checking `exp`
    pub leeway_secs: u64,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
    pub argon2_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            leeway_secs: DEFAULT_LEEWAY_SECS,
            argon2_memory_kib: DEFAULT_ARGON2_MEMORY_KIB,
            argon2_iterations: DEFAULT_ARGON2_ITERATIONS,
            argon2_parallelism: DEFAULT_ARGON2_PARALLELISM,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .field("argon2_memory_kib", &self.argon2_memory_kib)
            .field("argon2_iterations", &self.argon2_iterations)
            .field("argon2_parallelism", &self.argon2_parallelism)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set BM_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_secs < MIN_TOKEN_TTL_SECS || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be <= {}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        if self.argon2_memory_kib < MIN_ARGON2_MEMORY_KIB
            || self.argon2_memory_kib > MAX_ARGON2_MEMORY_KIB
        {
            return Err(ConfigError::auth(format!(
                "auth.argon2_memory_kib must be {}-{}, got {}",
                MIN_ARGON2_MEMORY_KIB, MAX_ARGON2_MEMORY_KIB, self.argon2_memory_kib
            )));
        }

        if self.argon2_iterations == 0 || self.argon2_iterations > MAX_ARGON2_ITERATIONS {
            return Err(ConfigError::auth(format!(
                "auth.argon2_iterations must be 1-{}, got {}",
                MAX_ARGON2_ITERATIONS, self.argon2_iterations
            )));
        }

        if self.argon2_parallelism == 0 || self.argon2_parallelism > MAX_ARGON2_PARALLELISM {
            return Err(ConfigError::auth(format!(
                "auth.argon2_parallelism must be 1-{}, got {}",
                MAX_ARGON2_PARALLELISM, self.argon2_parallelism
            )));
        }

        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }
}
