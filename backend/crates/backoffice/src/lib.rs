//! Backoffice Module
//!
//! Bookings, job postings and inbound messages managed from the admin
//! panel, plus the storage diagnostics endpoint.
//!
//! Clean Architecture structure:
//! - `domain/` - Records, statuses, repository traits
//! - `application/` - Use cases (bookings, careers, messages, diagnostics)
//! - `infra/` - In-memory store and sample data
//! - `presentation/` - HTTP handlers, DTOs, routers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::entities::{Booking, JobPosting, Message, NewMessage};
pub use domain::repository::{
    BookingRepository, JobRepository, MessageRepository, RecordCounts, StorageDiagnostics,
};
pub use domain::value_objects::{BookingStatus, EmploymentType, MessageStatus};
pub use error::{BackofficeError, BackofficeResult};
pub use infra::in_memory::InMemoryStore;
pub use presentation::{
    BackofficeState, BackofficeStore, bookings_router, careers_router, diagnostics_router,
    messages_router,
};
