//! Application Configuration

use platform::rate_limit::RateLimitConfig;

use crate::domain::services::ContactRules;

/// Default submissions per client IP per hour
pub const DEFAULT_SUBMISSIONS_PER_HOUR: u32 = 5;

#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Submissions per client IP (5 per hour)
    pub rate_limit: RateLimitConfig,
    pub rules: ContactRules,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            rate_limit: RateLimitConfig::new(DEFAULT_SUBMISSIONS_PER_HOUR, 3600),
            rules: ContactRules::default(),
        }
    }
}

impl ContactConfig {
    /// Create config with a custom hourly cap
    pub fn with_hourly_limit(max_requests: u32) -> Self {
        Self {
            rate_limit: RateLimitConfig::new(max_requests, 3600),
            ..Default::default()
        }
    }
}
