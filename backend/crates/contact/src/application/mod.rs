//! Application Layer

pub mod config;
pub mod submit_inquiry;

// Re-exports
pub use config::ContactConfig;
pub use submit_inquiry::{SubmitInquiryOutput, SubmitInquiryUseCase};
