use crate::{ConfigError, ConfigErrorResult};

use std::fmt::Display;
use std::ops::RangeInclusive;

use serde::Deserialize;

const MAX_REQUESTS_RANGE: RangeInclusive<u32> = 1..=10_000;
const WINDOW_SECS_RANGE: RangeInclusive<u64> = 1..=3600;

/// Throttle for signup/signin, applied per email address.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Attempts allowed per window
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window_secs: 60,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range("rate_limit.max_requests", self.max_requests, &MAX_REQUESTS_RANGE)?;
        check_range("rate_limit.window_secs", self.window_secs, &WINDOW_SECS_RANGE)
    }
}

#[track_caller]
fn check_range<T: PartialOrd + Display>(
    name: &str,
    value: T,
    range: &RangeInclusive<T>,
) -> ConfigErrorResult<()> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(ConfigError::config(format!(
        "{} must be {}-{}, got {}",
        name,
        range.start(),
        range.end(),
        value
    )))
}
