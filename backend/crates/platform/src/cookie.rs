//! Cookie Management Infrastructure
//!
//! Set-Cookie builders and request cookie lookup.

use axum::http::{HeaderMap, HeaderValue, header};
use std::time::Duration;

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age: Option<Duration>,
}

impl CookieConfig {
    /// HttpOnly, Secure, SameSite=Lax, Path=/ session cookie
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age: None,
        }
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Build Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut parts = vec![format!("{}={}", self.name, value)];
        parts.extend(self.attributes());

        if let Some(max_age) = self.max_age {
            parts.push(format!("Max-Age={}", max_age.as_secs()));
        }

        parts.join("; ")
    }

    /// Build Set-Cookie header that expires the cookie immediately.
    ///
    /// Keeps the same Path/Secure/SameSite attributes, otherwise browsers
    /// treat it as a different cookie and keep the old one.
    pub fn build_delete_cookie(&self) -> String {
        let mut parts = vec![format!("{}=", self.name)];
        parts.extend(self.attributes());
        parts.push("Max-Age=0".to_string());
        parts.push("Expires=Thu, 01 Jan 1970 00:00:00 GMT".to_string());
        parts.join("; ")
    }

    fn attributes(&self) -> Vec<String> {
        let mut attrs = Vec::with_capacity(4);
        if self.http_only {
            attrs.push("HttpOnly".to_string());
        }
        if self.secure {
            attrs.push("Secure".to_string());
        }
        attrs.push(format!("SameSite={}", self.same_site.as_str()));
        attrs.push(format!("Path={}", self.path));
        attrs
    }
}

/// Extract a cookie value from request headers.
///
/// Looks through every `Cookie` header, not only the first.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}

/// Set-Cookie header value, `None` if the value contains illegal header bytes
pub fn set_cookie_header(config: &CookieConfig, value: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&config.build_set_cookie(value)).ok()
}
