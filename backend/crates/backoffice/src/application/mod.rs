//! Application Layer
//!
//! Use cases for the records managed from the back-office.

pub mod bookings;
pub mod careers;
pub mod diagnostics;
pub mod messages;

// Re-exports
pub use bookings::{BookingUpdate, BookingsUseCase, NewBookingInput};
pub use careers::{CareersUseCase, JobUpdate, NewJobInput};
pub use diagnostics::{DiagnosticsReport, DiagnosticsUseCase};
pub use messages::MessagesUseCase;
