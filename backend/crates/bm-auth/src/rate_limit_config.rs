/// Throttle settings for credential endpoints
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum attempts per key per window
    pub max_requests: u32,
    /// Window duration in seconds
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
