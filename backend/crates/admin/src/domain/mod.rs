//! Domain Layer
//!
//! Contains entities, value objects, password hashing, session tokens and
//! repository traits.

pub mod entity;
pub mod repository;
pub mod services;
pub mod token;
pub mod value_object;

// Re-exports
pub use entity::{admin_account::AdminAccount, admin_session::AdminSession};
pub use repository::AdminAccountRepository;
pub use token::SessionTokenCodec;
