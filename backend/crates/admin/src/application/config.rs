//! Application Configuration
//!
//! Configuration for the Admin application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::crypto::random_bytes;
use platform::rate_limit::RateLimitConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Name of the session cookie the admin panel reads
pub const ADMIN_COOKIE_NAME: &str = "admin-token";

/// Admin application configuration
#[derive(Clone)]
pub struct AdminConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Secret mixed into password hashes and used as the HMAC key for tokens
    pub server_secret: Vec<u8>,
    /// Session lifetime (24 hours)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Seed the `admin`/`admin` development account at startup
    pub seed_development_account: bool,
    /// Login attempts per client IP (10 per 15 minutes)
    pub login_rate_limit: RateLimitConfig,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: ADMIN_COOKIE_NAME.to_string(),
            server_secret: random_bytes(32),
            session_ttl: Duration::from_secs(24 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            seed_development_account: false,
            login_rate_limit: RateLimitConfig::new(10, 15 * 60),
        }
    }
}

impl AdminConfig {
    /// Create config with a fixed server secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            server_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, dev account seeded)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            seed_development_account: true,
            ..Default::default()
        }
    }

    /// Get session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    /// Cookie attributes for the session cookie (Max-Age = session TTL)
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig::new(self.session_cookie_name.clone())
            .secure(self.cookie_secure)
            .same_site(self.cookie_same_site)
            .max_age(self.session_ttl)
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("server_secret", &"[REDACTED]")
            .field("session_ttl", &self.session_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field("seed_development_account", &self.seed_development_account)
            .field("login_rate_limit", &self.login_rate_limit)
            .finish()
    }
}
