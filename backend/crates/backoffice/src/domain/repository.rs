//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the infra layer.
//! Uniqueness rules (one active booking per slot, unique job slugs) are
//! enforced by the store, the way a database constraint would.

use chrono::{NaiveDate, NaiveTime};
use kernel::id::{BookingId, JobId, MessageId};

use crate::domain::entities::{Booking, JobPosting, Message};
use crate::domain::value_objects::{BookingStatus, MessageStatus};
use crate::error::BackofficeResult;

/// Booking repository trait
#[trait_variant::make(BookingRepository: Send)]
pub trait LocalBookingRepository {
    /// Insert a booking. Fails with `SlotTaken` if an active booking holds the slot.
    async fn insert_booking(&self, booking: &Booking) -> BackofficeResult<()>;

    async fn find_booking(&self, id: BookingId) -> BackofficeResult<Option<Booking>>;

    /// Newest first
    async fn list_bookings(&self, status: Option<BookingStatus>) -> BackofficeResult<Vec<Booking>>;

    /// Replace a booking. Fails with `SlotTaken` if another active booking holds the slot.
    async fn update_booking(&self, booking: &Booking) -> BackofficeResult<()>;

    /// Returns `false` if nothing was deleted
    async fn delete_booking(&self, id: BookingId) -> BackofficeResult<bool>;

    /// Active booking at `date`/`time`, if any
    async fn find_booking_at(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> BackofficeResult<Option<Booking>>;
}

/// Job posting repository trait
#[trait_variant::make(JobRepository: Send)]
pub trait LocalJobRepository {
    /// Insert a posting. Fails with `SlugTaken` on duplicate slug.
    async fn insert_job(&self, job: &JobPosting) -> BackofficeResult<()>;

    async fn find_job(&self, id: JobId) -> BackofficeResult<Option<JobPosting>>;

    async fn find_job_by_slug(&self, slug: &str) -> BackofficeResult<Option<JobPosting>>;

    /// Newest first
    async fn list_jobs(&self, include_inactive: bool) -> BackofficeResult<Vec<JobPosting>>;

    /// Replace a posting. Fails with `SlugTaken` if another posting has the slug.
    async fn update_job(&self, job: &JobPosting) -> BackofficeResult<()>;

    async fn delete_job(&self, id: JobId) -> BackofficeResult<bool>;
}

/// Inbound message repository trait
#[trait_variant::make(MessageRepository: Send)]
pub trait LocalMessageRepository {
    async fn insert_message(&self, message: &Message) -> BackofficeResult<()>;

    async fn find_message(&self, id: MessageId) -> BackofficeResult<Option<Message>>;

    /// Newest first
    async fn list_messages(&self, status: Option<MessageStatus>) -> BackofficeResult<Vec<Message>>;

    async fn update_message(&self, message: &Message) -> BackofficeResult<()>;

    async fn delete_message(&self, id: MessageId) -> BackofficeResult<bool>;
}

/// Record counts per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct RecordCounts {
    pub bookings: usize,
    pub jobs: usize,
    pub messages: usize,
}

/// Storage health checks for the diagnostics endpoint
#[trait_variant::make(StorageDiagnostics: Send)]
pub trait LocalStorageDiagnostics {
    /// Short name of the storage backend
    fn backend_name(&self) -> &'static str;

    async fn record_counts(&self) -> BackofficeResult<RecordCounts>;

    /// Write, read back and remove a probe value
    async fn round_trip_probe(&self) -> BackofficeResult<()>;
}
