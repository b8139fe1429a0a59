//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod provision;
pub mod sign_in;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AdminConfig;
pub use provision::{BootstrapAccount, ProvisionAccountsUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
