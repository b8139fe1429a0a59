use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Back-office capabilities carried in the session token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    #[display("manage_bookings")]
    ManageBookings,
    #[display("manage_careers")]
    ManageCareers,
    #[display("manage_messages")]
    ManageMessages,
    #[display("view_diagnostics")]
    ViewDiagnostics,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Permission::ManageBookings,
        Permission::ManageCareers,
        Permission::ManageMessages,
        Permission::ViewDiagnostics,
    ];
}
