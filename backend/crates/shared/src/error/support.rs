//! Support contact shown to end users on server errors
//!
//! Set once at startup from the site template config; every 5xx response
//! rendered from [`AppError`](super::app_error::AppError) without an explicit
//! action points the visitor here.

use std::sync::OnceLock;

/// Used until the binary sets the configured address
pub const DEFAULT_SUPPORT_CONTACT: &str = "support@example.com";

static SUPPORT_CONTACT: OnceLock<String> = OnceLock::new();

/// Set the support contact. Returns `false` if it was already set.
pub fn set_support_contact(contact: impl Into<String>) -> bool {
    SUPPORT_CONTACT.set(contact.into()).is_ok()
}

pub fn support_contact() -> &'static str {
    SUPPORT_CONTACT
        .get()
        .map(String::as_str)
        .unwrap_or(DEFAULT_SUPPORT_CONTACT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_contact_is_never_empty() {
        assert!(!support_contact().is_empty());
    }
}
