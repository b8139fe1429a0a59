//! Domain Layer
//!
//! Records managed from the back-office, their value objects and the
//! repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{Booking, JobPosting, Message, NewMessage};
pub use repository::{BookingRepository, JobRepository, MessageRepository, StorageDiagnostics};
pub use value_objects::{BookingStatus, EmploymentType, MessageStatus};
