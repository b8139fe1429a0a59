//! Admin Password Value Object
//!
//! Plaintext password as received from the login form. Wiped from memory on
//! drop and never printed.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Plaintext admin password
///
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct AdminPassword(String);

impl AdminPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AdminPassword").field(&"[REDACTED]").finish()
    }
}
