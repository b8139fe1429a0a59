//! Stored password hash in `salt:hash` form

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Stored password hash is malformed")]
pub struct MalformedHash;

/// `salt:hash`, both lowercase hex
#[derive(Clone, PartialEq, Eq)]
pub struct SaltedHash {
    salt: String,
    hash: String,
}

impl SaltedHash {
    pub(crate) fn new(salt: String, hash: String) -> Self {
        Self { salt, hash }
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl FromStr for SaltedHash {
    type Err = MalformedHash;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (salt, hash) = s.rsplit_once(':').ok_or(MalformedHash)?;
        if salt.is_empty() || hash.is_empty() {
            return Err(MalformedHash);
        }
        Ok(Self::new(salt.to_string(), hash.to_string()))
    }
}

impl fmt::Display for SaltedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.salt, self.hash)
    }
}

impl fmt::Debug for SaltedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaltedHash")
            .field("salt", &self.salt)
            .field("hash", &"[REDACTED]")
            .finish()
    }
}
