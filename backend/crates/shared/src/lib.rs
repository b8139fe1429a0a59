//! Shared Kernel - vocabulary shared by every back-office crate
//!
//! This crate contains the smallest common core:
//! - Unified error type, error kinds and result aliases
//! - Field-level validation error details
//! - Typed record IDs (bookings, messages, job postings)
//!
//! Only things whose meaning is identical across admin, contact and
//! backoffice belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod field;
    pub mod kind;
    pub mod support;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;

pub use error::app_error::{AppError, AppResult, OptionExt, ResultExt};
pub use error::field::{FieldError, FieldErrors};
pub use error::kind::ErrorKind;
