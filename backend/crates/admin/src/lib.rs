//! Admin (Back-office Authentication) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Accounts, sessions, password hashing, session tokens
//! - `application/` - Sign-in, session check, account provisioning
//! - `infra/` - In-memory account store
//! - `presentation/` - HTTP handlers, DTOs, router, guard
//!
//! ## Security Model
//! - Passwords stored as `salt:hash`, `hash = SHA256(password + salt + secret)`
//! - Stateless sessions: an HMAC-SHA256 signed token in the `admin-token` cookie
//! - Any undecodable, tampered or expired token means "not signed in"
//! - Login attempts are rate limited per client IP

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AdminConfig;
pub use application::provision::{BootstrapAccount, ProvisionAccountsUseCase};
pub use domain::entity::admin_session::AdminSession;
pub use domain::token::SessionTokenCodec;
pub use domain::value_object::{
    admin_password::AdminPassword, admin_role::AdminRole, permission::Permission,
};
pub use error::{AdminError, AdminResult};
pub use infra::in_memory::InMemoryAdminRepository;
pub use presentation::guard::{AdminContext, AdminGuard};
pub use presentation::middleware::require_admin_session;
pub use presentation::router::admin_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
