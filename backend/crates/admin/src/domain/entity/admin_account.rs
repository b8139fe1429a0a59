//! Admin Account Entity

use chrono::{DateTime, Utc};
use kernel::id::AdminId;

use crate::domain::value_object::{admin_role::AdminRole, salted_hash::SaltedHash};

#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub admin_id: AdminId,
    pub username: String,
    pub password_hash: SaltedHash,
    pub role: AdminRole,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl AdminAccount {
    pub fn new(username: impl Into<String>, password_hash: SaltedHash, role: AdminRole) -> Self {
        Self {
            admin_id: AdminId::new(),
            username: username.into(),
            password_hash,
            role,
            active: true,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[inline]
    pub fn can_sign_in(&self) -> bool {
        self.active
    }

    pub fn record_login(&mut self) {
        self.last_login_at = Some(Utc::now());
    }
}
