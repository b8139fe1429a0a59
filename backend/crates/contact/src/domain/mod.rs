//! Domain Layer

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-exports
pub use entities::{ContactForm, Inquiry};
pub use services::{ContactRules, validate_form};
pub use value_objects::ReferenceId;
