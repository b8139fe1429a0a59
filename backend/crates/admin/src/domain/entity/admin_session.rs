//! Admin Session
//!
//! The session is not stored server-side. It travels inside the signed
//! `admin-token` cookie and is trusted only after signature and expiry
//! checks.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::entity::admin_account::AdminAccount;
use crate::domain::value_object::{admin_role::AdminRole, permission::Permission};
use crate::error::{AdminError, AdminResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub admin_id: String,
    pub username: String,
    pub role: AdminRole,
    pub permissions: Vec<Permission>,
    /// Unix timestamp ms
    pub created_at: i64,
    /// Unix timestamp ms
    pub expires_at: i64,
}

impl AdminSession {
    /// Session for `account` valid for `ttl` starting at `now_ms`
    pub fn new_at(account: &AdminAccount, ttl: Duration, now_ms: i64) -> Self {
        Self {
            admin_id: account.admin_id.to_string(),
            username: account.username.clone(),
            role: account.role,
            permissions: account.role.default_permissions(),
            created_at: now_ms,
            expires_at: now_ms.saturating_add(ttl.as_millis() as i64),
        }
    }

    pub fn new(account: &AdminAccount, ttl: Duration) -> Self {
        Self::new_at(account, ttl, Utc::now().timestamp_millis())
    }

    /// Expired strictly after `expires_at`
    #[inline]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    pub fn remaining_ms_at(&self, now_ms: i64) -> i64 {
        (self.expires_at - now_ms).max(0)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    pub fn require(&self, permission: Permission) -> AdminResult<()> {
        if self.has_permission(permission) {
            Ok(())
        } else {
            Err(AdminError::PermissionDenied(permission))
        }
    }
}
