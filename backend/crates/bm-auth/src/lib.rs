pub mod access_guard;
pub mod claims;
pub mod credential_rate_limiter;
pub mod credential_verifier;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod ownership;
pub mod password_hasher;
pub mod rate_limit_config;

pub use access_guard::{AccessGuard, AuthenticatedUser};
pub use claims::Claims;
pub use credential_rate_limiter::CredentialRateLimiter;
pub use credential_verifier::CredentialVerifier;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
pub use ownership::authorize_mutation;
pub use password_hasher::PasswordHasher;
pub use rate_limit_config::RateLimitConfig;

#[cfg(test)]
mod tests;
