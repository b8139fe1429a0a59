//! Check Session Use Case
//!
//! Resolves the session carried by an `admin-token` cookie value.

use chrono::Utc;

use crate::domain::entity::admin_session::AdminSession;
use crate::domain::token::SessionTokenCodec;

/// Check session use case
#[derive(Debug, Clone)]
pub struct CheckSessionUseCase {
    codec: SessionTokenCodec,
}

impl CheckSessionUseCase {
    pub fn new(codec: SessionTokenCodec) -> Self {
        Self { codec }
    }

    /// `None` for a missing, tampered or expired token
    pub fn execute_at(&self, token: Option<&str>, now_ms: i64) -> Option<AdminSession> {
        self.codec.decode_at(token?, now_ms)
    }

    pub fn execute(&self, token: Option<&str>) -> Option<AdminSession> {
        self.execute_at(token, Utc::now().timestamp_millis())
    }

    /// Just check if the token is valid
    pub fn is_valid(&self, token: Option<&str>) -> bool {
        self.execute(token).is_some()
    }
}
