//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::{BackofficeState, BackofficeStore};
pub use router::{bookings_router, careers_router, diagnostics_router, messages_router};
