use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Per-email throttle for signup/signin attempts
pub struct CredentialRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    config: RateLimitConfig,
}

impl CredentialRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    /// Record an attempt for `key`; errors once the key's budget is spent
    #[track_caller]
    pub fn check(&self, key: &str) -> AuthErrorResult<()> {
        self.limiter
            .check_key(&key.to_ascii_lowercase())
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop state for keys whose budget has fully replenished
    pub fn prune(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }
}

impl Default for CredentialRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
