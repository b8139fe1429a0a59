//! Client identification utilities
//!
//! Resolve the visitor's IP address behind a reverse proxy.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Key used when no IP address can be determined
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Extract client IP address from headers
///
/// Checks `X-Forwarded-For` (first hop), then `X-Real-IP`,
/// then falls back to the direct connection IP.
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `direct_ip` - Direct connection IP address
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok());

    if forwarded.is_some() {
        return forwarded;
    }

    let real_ip = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<IpAddr>().ok());

    real_ip.or(direct_ip)
}

/// Rate-limit key for a client
pub fn client_key(ip: Option<IpAddr>) -> String {
    ip.map(|ip| ip.to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
