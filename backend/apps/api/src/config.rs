//! Server configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).
//! Debug builds fall back to development defaults; release builds require
//! `ADMIN_SESSION_SECRET`.

use std::net::SocketAddr;
use std::time::Duration;

use admin::{AdminConfig, AdminPassword, AdminRole, BootstrapAccount};
use anyhow::{Context, bail};
use contact::ContactConfig;
use serde::Serialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

/// Values the site owner edits before going live. Served by `GET /api/site`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_name: String,
    pub support_email: String,
    pub support_phone: Option<String>,
    pub features: FeatureFlags,
}

/// Which optional sections the site offers
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub bookings_enabled: bool,
    pub careers_enabled: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Your Agency".to_string(),
            support_email: kernel::error::support::DEFAULT_SUPPORT_CONTACT.to_string(),
            support_phone: None,
            features: FeatureFlags {
                bookings_enabled: true,
                careers_enabled: true,
            },
        }
    }
}

#[derive(Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub admin: AdminConfig,
    /// From `ADMIN_USERNAME` / `ADMIN_PASSWORD`
    pub bootstrap_admin: Option<BootstrapAccount>,
    pub contact: ContactConfig,
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `lookup` returns the raw value of a variable, if set
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        development: bool,
    ) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be host:port")?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        let mut admin = if development {
            AdminConfig::development()
        } else {
            AdminConfig::default()
        };
        match var("ADMIN_SESSION_SECRET") {
            Some(secret_b64) => {
                let secret = platform::crypto::from_base64(&secret_b64)
                    .context("ADMIN_SESSION_SECRET must be standard base64")?;
                if secret.len() < 32 {
                    bail!("ADMIN_SESSION_SECRET must decode to at least 32 bytes");
                }
                admin.server_secret = secret;
            }
            None if !development => bail!("ADMIN_SESSION_SECRET must be set in production"),
            None => {
                tracing::warn!("ADMIN_SESSION_SECRET not set; sessions end on restart");
            }
        }
        if let Some(hours) = var("ADMIN_SESSION_TTL_HOURS") {
            let hours: u64 = hours
                .parse()
                .context("ADMIN_SESSION_TTL_HOURS must be a whole number")?;
            admin.session_ttl = Duration::from_secs(hours.max(1) * 3600);
        }

        let bootstrap_admin = match (var("ADMIN_USERNAME"), lookup("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(BootstrapAccount {
                username,
                password: AdminPassword::new(password),
                role: AdminRole::SuperAdmin,
            }),
            (None, None) => None,
            _ => bail!("ADMIN_USERNAME and ADMIN_PASSWORD must be set together"),
        };

        let contact = match var("CONTACT_RATE_LIMIT_MAX") {
            Some(max) => ContactConfig::with_hourly_limit(
                max.parse()
                    .context("CONTACT_RATE_LIMIT_MAX must be a whole number")?,
            ),
            None => ContactConfig::default(),
        };

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            site_name: var("SITE_NAME").unwrap_or(defaults.site_name),
            support_email: var("SUPPORT_EMAIL").unwrap_or(defaults.support_email),
            support_phone: var("SUPPORT_PHONE"),
            features: FeatureFlags {
                bookings_enabled: flag(var("FEATURE_BOOKINGS"), "FEATURE_BOOKINGS", true)?,
                careers_enabled: flag(var("FEATURE_CAREERS"), "FEATURE_CAREERS", true)?,
            },
        };

        Ok(Self {
            bind_addr,
            frontend_origins,
            admin,
            bootstrap_admin,
            contact,
            site,
        })
    }
}

fn flag(value: Option<String>, name: &str, default: bool) -> anyhow::Result<bool> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{name} must be true or false, got '{other}'"),
    }
}
