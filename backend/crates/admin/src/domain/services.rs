//! Password hashing
//!
//! `hash = SHA256(password + salt + secret)`, stored as `salt:hash`.

use platform::crypto::{constant_time_eq, random_hex, sha256_hex};

use crate::domain::value_object::{admin_password::AdminPassword, salted_hash::SaltedHash};

/// Random salt length in bytes (hex-encoded to twice that)
pub const SALT_BYTES: usize = 16;

/// Hash `password` with `salt`, or with a fresh random salt when `None`
pub fn hash_password(password: &AdminPassword, salt: Option<&str>, secret: &[u8]) -> SaltedHash {
    let salt = salt
        .map(str::to_owned)
        .unwrap_or_else(|| random_hex(SALT_BYTES));
    let hash = sha256_hex(&[password.as_bytes(), salt.as_bytes(), secret]);
    SaltedHash::new(salt, hash)
}

/// Re-derive with the stored salt and compare in constant time
pub fn verify_hash(password: &AdminPassword, stored: &SaltedHash, secret: &[u8]) -> bool {
    let candidate = hash_password(password, Some(stored.salt()), secret);
    constant_time_eq(candidate.hash().as_bytes(), stored.hash().as_bytes())
}

/// [`verify_hash`] against a stored `salt:hash` string.
/// Malformed stored values never verify.
pub fn verify_password(password: &AdminPassword, stored: &str, secret: &[u8]) -> bool {
    stored
        .parse::<SaltedHash>()
        .is_ok_and(|stored| verify_hash(password, &stored, secret))
}
