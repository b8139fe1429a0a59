//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the admin guard.

pub mod dto;
pub mod guard;
pub mod handlers;
pub mod middleware;
pub mod router;
