//! Session token codec
//!
//! Token layout: `base64url( json + "." + hex(HMAC-SHA256(secret, json)) )`.
//! The payload is split from the signature at the last `.`, so dots inside
//! the JSON are harmless.

use chrono::Utc;
use platform::crypto::{constant_time_eq, from_base64_url, hmac_sha256_hex, to_base64_url};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::entity::admin_session::AdminSession;
use crate::error::AdminResult;

/// Why a token was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejection {
    #[error("token is not valid base64")]
    Encoding,
    #[error("token has no signature")]
    MissingSignature,
    #[error("signature mismatch")]
    BadSignature,
    #[error("payload is not a session")]
    Payload,
    #[error("session expired")]
    Expired,
}

/// Signs and verifies admin session tokens with the server secret
#[derive(Clone)]
pub struct SessionTokenCodec {
    secret: Arc<[u8]>,
}

impl SessionTokenCodec {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        let secret: Vec<u8> = secret.into();
        Self {
            secret: Arc::from(secret),
        }
    }

    pub fn encode(&self, session: &AdminSession) -> AdminResult<String> {
        let mut raw = serde_json::to_vec(session)?;
        let signature = hmac_sha256_hex(&self.secret, &raw);
        raw.push(b'.');
        raw.extend_from_slice(signature.as_bytes());
        Ok(to_base64_url(&raw))
    }

    /// Verify signature, then expiry
    pub fn verify_at(&self, token: &str, now_ms: i64) -> Result<AdminSession, TokenRejection> {
        let raw = from_base64_url(token.trim()).map_err(|_| TokenRejection::Encoding)?;
        let split = raw
            .iter()
            .rposition(|&b| b == b'.')
            .ok_or(TokenRejection::MissingSignature)?;
        let (payload, signature) = (&raw[..split], &raw[split + 1..]);

        let expected = hmac_sha256_hex(&self.secret, payload);
        if !constant_time_eq(expected.as_bytes(), signature) {
            return Err(TokenRejection::BadSignature);
        }

        let session: AdminSession =
            serde_json::from_slice(payload).map_err(|_| TokenRejection::Payload)?;
        if session.is_expired_at(now_ms) {
            return Err(TokenRejection::Expired);
        }
        Ok(session)
    }

    /// Session carried by `token`, or `None` for anything that does not verify
    pub fn decode_at(&self, token: &str, now_ms: i64) -> Option<AdminSession> {
        match self.verify_at(token, now_ms) {
            Ok(session) => Some(session),
            Err(TokenRejection::BadSignature) => {
                tracing::warn!("Admin token signature mismatch");
                None
            }
            Err(reason) => {
                tracing::debug!(%reason, "Admin token rejected");
                None
            }
        }
    }

    pub fn decode(&self, token: &str) -> Option<AdminSession> {
        self.decode_at(token, Utc::now().timestamp_millis())
    }
}

impl fmt::Debug for SessionTokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokenCodec")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
