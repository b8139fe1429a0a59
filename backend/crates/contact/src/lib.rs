//! Contact Intake Module
//!
//! Accepts the public contact form and files it as an inbound message in
//! the back-office.
//!
//! Clean Architecture structure:
//! - `domain/` - Form, validation rules, reference IDs
//! - `application/` - Submit use case and configuration
//! - `presentation/` - HTTP handler, DTOs, router
//!
//! ## Abuse controls
//! - Per-IP sliding window (5 submissions per hour by default)
//! - Hidden honeypot field; bots get a normal-looking response
//! - Markup and control characters stripped from every field

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;


// Re-exports for convenience
pub use application::config::ContactConfig;
pub use domain::{ContactForm, ReferenceId};
pub use error::{ContactError, ContactResult};
pub use presentation::router::contact_router;
