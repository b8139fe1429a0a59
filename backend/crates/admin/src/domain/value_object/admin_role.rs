use serde::{Deserialize, Serialize};
use std::fmt;

use super::permission::Permission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    SuperAdmin,
    #[default]
    Admin,
    Editor,
}

impl AdminRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use AdminRole::*;
        match self {
            SuperAdmin => "super_admin",
            Admin => "admin",
            Editor => "editor",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        use AdminRole::*;
        match code {
            "super_admin" => Some(SuperAdmin),
            "admin" => Some(Admin),
            "editor" => Some(Editor),
            _ => None,
        }
    }

    /// Permissions granted to a freshly signed-in session of this role
    pub fn default_permissions(&self) -> Vec<Permission> {
        use AdminRole::*;
        match self {
            SuperAdmin => Permission::ALL.to_vec(),
            Admin => vec![
                Permission::ManageBookings,
                Permission::ManageCareers,
                Permission::ManageMessages,
            ],
            Editor => vec![Permission::ManageCareers],
        }
    }

    #[inline]
    pub const fn is_super_admin(&self) -> bool {
        matches!(self, AdminRole::SuperAdmin)
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_from_code() {
        assert_eq!(AdminRole::from_code("super_admin"), Some(AdminRole::SuperAdmin));
        assert_eq!(AdminRole::from_code("admin"), Some(AdminRole::Admin));
        assert_eq!(AdminRole::from_code("editor"), Some(AdminRole::Editor));
        assert_eq!(AdminRole::from_code("root"), None);
    }

    #[test]
    fn test_admin_role_display() {
        assert_eq!(AdminRole::SuperAdmin.to_string(), "super_admin");
        assert_eq!(AdminRole::Admin.to_string(), "admin");
        assert_eq!(AdminRole::Editor.to_string(), "editor");
    }

    #[test]
    fn test_default_permissions() {
        assert_eq!(AdminRole::SuperAdmin.default_permissions().len(), 4);
        assert!(
            !AdminRole::Admin
                .default_permissions()
                .contains(&Permission::ViewDiagnostics)
        );
        assert_eq!(
            AdminRole::Editor.default_permissions(),
            vec![Permission::ManageCareers]
        );
    }

    #[test]
    fn test_admin_role_serde() {
        let json = serde_json::to_string(&AdminRole::SuperAdmin).unwrap();
        assert_eq!(json, "\"super_admin\"");
    }
}
