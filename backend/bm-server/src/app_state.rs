use bm_auth::{
    AccessGuard, CredentialRateLimiter, CredentialVerifier, JwtIssuer, JwtValidator,
    PasswordHasher, RateLimitConfig, Result as AuthErrorResult,
};
use bm_db::{BookmarkRepository, UserRepository};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub users: UserRepository,
    pub bookmarks: BookmarkRepository,
    pub issuer: Arc<JwtIssuer>,
    pub guard: AccessGuard,
    pub verifier: CredentialVerifier,
    pub rate_limiter: Arc<CredentialRateLimiter>,
}

/// Everything needed to wire the auth stack
pub struct AuthSettings {
    pub jwt_secret: Vec<u8>,
    pub token_ttl: Duration,
    pub leeway_secs: u64,
    pub hasher: PasswordHasher,
    pub rate_limit: RateLimitConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, settings: AuthSettings) -> AuthErrorResult<Self> {
        let users = UserRepository::new(pool.clone());
        let bookmarks = BookmarkRepository::new(pool.clone());

        let issuer = Arc::new(JwtIssuer::with_hs256(
            &settings.jwt_secret,
            settings.token_ttl,
        ));
        let validator = Arc::new(JwtValidator::with_hs256_and_leeway(
            &settings.jwt_secret,
            settings.leeway_secs,
        ));
        let verifier = CredentialVerifier::new(users.clone(), settings.hasher)?;

        Ok(Self {
            pool,
            users,
            bookmarks,
            issuer,
            guard: AccessGuard::new(validator),
            verifier,
            rate_limiter: Arc::new(CredentialRateLimiter::new(settings.rate_limit)),
        })
    }
}
