//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::admin_session::AdminSession;
use crate::domain::value_object::{admin_role::AdminRole, permission::Permission};

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response (the token itself only travels in the cookie)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub admin: AdminProfile,
    pub expires_at: i64,
}

// ============================================================================
// Session Status
// ============================================================================

/// Signed-in admin as shown to the panel
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub admin_id: String,
    pub username: String,
    pub role: AdminRole,
    pub permissions: Vec<Permission>,
}

impl From<&AdminSession> for AdminProfile {
    fn from(session: &AdminSession) -> Self {
        Self {
            admin_id: session.admin_id.clone(),
            username: session.username.clone(),
            role: session.role,
            permissions: session.permissions.clone(),
        }
    }
}

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl SessionStatusResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            admin: None,
            expires_at: None,
        }
    }
}

impl From<Option<AdminSession>> for SessionStatusResponse {
    fn from(session: Option<AdminSession>) -> Self {
        match session {
            Some(session) => Self {
                authenticated: true,
                admin: Some(AdminProfile::from(&session)),
                expires_at: Some(session.expires_at),
            },
            None => Self::anonymous(),
        }
    }
}
