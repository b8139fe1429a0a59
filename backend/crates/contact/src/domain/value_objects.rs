//! Domain Value Objects

use std::fmt;

use chrono::Utc;
use serde::Serialize;

/// Reference quoted back to the visitor: `CT-<ms timestamp, base 36>-<4 random>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReferenceId(String);

impl ReferenceId {
    pub const PREFIX: &'static str = "CT";
    const SUFFIX_LEN: usize = 4;

    pub fn generate_at(now_ms: i64) -> Self {
        let suffix = platform::crypto::random_alphanumeric(Self::SUFFIX_LEN).to_ascii_uppercase();
        Self(format!(
            "{}-{}-{}",
            Self::PREFIX,
            to_base36(now_ms.max(0) as u64),
            suffix
        ))
    }

    pub fn generate() -> Self {
        Self::generate_at(Utc::now().timestamp_millis())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercase base-36
fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "LOYW3V28");
    }

    #[test]
    fn test_reference_id_shape() {
        let id = ReferenceId::generate_at(1_700_000_000_000);
        let parts: Vec<_> = id.as_str().split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "CT");
        assert_eq!(parts[1], "LOYW3V28");
        assert_eq!(parts[2].len(), 4);
        assert!(
            parts[2]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_serializes_as_string() {
        let id = ReferenceId::generate_at(36);
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json.as_str(), Some(id.as_str()));
    }
}
