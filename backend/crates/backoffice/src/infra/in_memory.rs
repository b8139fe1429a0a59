//! In-memory store
//!
//! Holds bookings, job postings and messages for the lifetime of the
//! process. Everything is lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use kernel::id::{BookingId, JobId, MessageId};
use tokio::sync::RwLock;

use crate::domain::entities::{Booking, JobPosting, Message};
use crate::domain::repository::{
    BookingRepository, JobRepository, MessageRepository, RecordCounts, StorageDiagnostics,
};
use crate::domain::value_objects::{BookingStatus, MessageStatus};
use crate::error::{BackofficeError, BackofficeResult};
use crate::infra::seed;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    bookings: Arc<RwLock<HashMap<BookingId, Booking>>>,
    jobs: Arc<RwLock<HashMap<JobId, JobPosting>>>,
    messages: Arc<RwLock<HashMap<MessageId, Message>>>,
    probes: Arc<RwLock<HashMap<String, i64>>>,
}

impl InMemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with sample records for the admin panel
    pub fn with_mock_data() -> Self {
        let today = Utc::now().date_naive();

        Self {
            bookings: Arc::new(RwLock::new(
                seed::mock_bookings(today)
                    .into_iter()
                    .map(|b| (b.id, b))
                    .collect(),
            )),
            jobs: Arc::new(RwLock::new(
                seed::mock_jobs().into_iter().map(|j| (j.id, j)).collect(),
            )),
            messages: Arc::new(RwLock::new(
                seed::mock_messages().into_iter().map(|m| (m.id, m)).collect(),
            )),
            probes: Arc::default(),
        }
    }
}

fn newest_first<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

// ============================================================================
// Bookings
// ============================================================================

impl BookingRepository for InMemoryStore {
    async fn insert_booking(&self, booking: &Booking) -> BackofficeResult<()> {
        let mut bookings = self.bookings.write().await;
        if bookings
            .values()
            .any(|b| b.occupies(booking.preferred_date, booking.preferred_time))
        {
            return Err(BackofficeError::SlotTaken {
                date: booking.preferred_date,
                time: booking.preferred_time,
            });
        }
        bookings.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn find_booking(&self, id: BookingId) -> BackofficeResult<Option<Booking>> {
        Ok(self.bookings.read().await.get(&id).cloned())
    }

    async fn list_bookings(&self, status: Option<BookingStatus>) -> BackofficeResult<Vec<Booking>> {
        let bookings = self
            .bookings
            .read()
            .await
            .values()
            .filter(|b| status.is_none_or(|s| b.status == s))
            .cloned()
            .collect();
        Ok(newest_first(bookings, |b: &Booking| b.created_at))
    }

    async fn update_booking(&self, booking: &Booking) -> BackofficeResult<()> {
        let mut bookings = self.bookings.write().await;
        let current = bookings
            .get(&booking.id)
            .map(|b| b.status)
            .ok_or(BackofficeError::NotFound("Booking"))?;
        if !current.can_transition_to(booking.status) {
            return Err(BackofficeError::InvalidTransition {
                from: current,
                to: booking.status,
            });
        }
        if booking.status.holds_slot()
            && bookings.values().any(|b| {
                b.id != booking.id && b.occupies(booking.preferred_date, booking.preferred_time)
            })
        {
            return Err(BackofficeError::SlotTaken {
                date: booking.preferred_date,
                time: booking.preferred_time,
            });
        }
        bookings.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn delete_booking(&self, id: BookingId) -> BackofficeResult<bool> {
        Ok(self.bookings.write().await.remove(&id).is_some())
    }

    async fn find_booking_at(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> BackofficeResult<Option<Booking>> {
        Ok(self
            .bookings
            .read()
            .await
            .values()
            .find(|b| b.occupies(date, time))
            .cloned())
    }
}

// ============================================================================
// Job postings
// ============================================================================

impl JobRepository for InMemoryStore {
    async fn insert_job(&self, job: &JobPosting) -> BackofficeResult<()> {
        let mut jobs = self.jobs.write().await;
        if jobs.values().any(|j| j.slug == job.slug) {
            return Err(BackofficeError::SlugTaken(job.slug.clone()));
        }
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn find_job(&self, id: JobId) -> BackofficeResult<Option<JobPosting>> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    async fn find_job_by_slug(&self, slug: &str) -> BackofficeResult<Option<JobPosting>> {
        Ok(self
            .jobs
            .read()
            .await
            .values()
            .find(|j| j.slug == slug)
            .cloned())
    }

    async fn list_jobs(&self, include_inactive: bool) -> BackofficeResult<Vec<JobPosting>> {
        let jobs = self
            .jobs
            .read()
            .await
            .values()
            .filter(|j| include_inactive || j.is_active)
            .cloned()
            .collect();
        Ok(newest_first(jobs, |j: &JobPosting| j.posted_at))
    }

    async fn update_job(&self, job: &JobPosting) -> BackofficeResult<()> {
        let mut jobs = self.jobs.write().await;
        if !jobs.contains_key(&job.id) {
            return Err(BackofficeError::NotFound("Job posting"));
        }
        if jobs.values().any(|j| j.id != job.id && j.slug == job.slug) {
            return Err(BackofficeError::SlugTaken(job.slug.clone()));
        }
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn delete_job(&self, id: JobId) -> BackofficeResult<bool> {
        Ok(self.jobs.write().await.remove(&id).is_some())
    }
}

// ============================================================================
// Messages
// ============================================================================

impl MessageRepository for InMemoryStore {
    async fn insert_message(&self, message: &Message) -> BackofficeResult<()> {
        self.messages
            .write()
            .await
            .insert(message.id, message.clone());
        Ok(())
    }

    async fn find_message(&self, id: MessageId) -> BackofficeResult<Option<Message>> {
        Ok(self.messages.read().await.get(&id).cloned())
    }

    async fn list_messages(&self, status: Option<MessageStatus>) -> BackofficeResult<Vec<Message>> {
        let messages = self
            .messages
            .read()
            .await
            .values()
            .filter(|m| status.is_none_or(|s| m.status == s))
            .cloned()
            .collect();
        Ok(newest_first(messages, |m: &Message| m.created_at))
    }

    async fn update_message(&self, message: &Message) -> BackofficeResult<()> {
        let mut messages = self.messages.write().await;
        match messages.get_mut(&message.id) {
            Some(existing) => {
                *existing = message.clone();
                Ok(())
            }
            None => Err(BackofficeError::NotFound("Message")),
        }
    }

    async fn delete_message(&self, id: MessageId) -> BackofficeResult<bool> {
        Ok(self.messages.write().await.remove(&id).is_some())
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

impl StorageDiagnostics for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "in-memory"
    }

    async fn record_counts(&self) -> BackofficeResult<RecordCounts> {
        Ok(RecordCounts {
            bookings: self.bookings.read().await.len(),
            jobs: self.jobs.read().await.len(),
            messages: self.messages.read().await.len(),
        })
    }

    async fn round_trip_probe(&self) -> BackofficeResult<()> {
        let key = format!("probe-{}", platform::crypto::random_hex(8));
        let written = Utc::now().timestamp_millis();

        self.probes.write().await.insert(key.clone(), written);
        let read = self.probes.write().await.remove(&key);

        match read {
            Some(value) if value == written => Ok(()),
            _ => Err(BackofficeError::Internal(
                "Storage probe value did not round-trip".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewMessage;

    fn booking_at(date: NaiveDate, hour: u32) -> Booking {
        let now = Utc::now();
        Booking {
            id: BookingId::new(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            company: None,
            service: "Branding".to_string(),
            preferred_date: date,
            preferred_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            notes: None,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_taken_slot() {
        let store = InMemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2030, 1, 7).unwrap();

        store.insert_booking(&booking_at(date, 10)).await.unwrap();
        let err = store.insert_booking(&booking_at(date, 10)).await.unwrap_err();
        assert!(matches!(err, BackofficeError::SlotTaken { .. }));

        store.insert_booking(&booking_at(date, 11)).await.unwrap();
    }

    #[tokio::test]
    async fn test_cancelled_booking_releases_slot() {
        let store = InMemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2030, 1, 7).unwrap();

        let mut first = booking_at(date, 10);
        store.insert_booking(&first).await.unwrap();
        first.status = BookingStatus::Cancelled;
        store.update_booking(&first).await.unwrap();

        store.insert_booking(&booking_at(date, 10)).await.unwrap();
        assert!(store.find_booking_at(date, first.preferred_time).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_rejects_transition_from_stale_copy() {
        let store = InMemoryStore::new();
        let mut booking = booking_at(NaiveDate::from_ymd_opt(2030, 1, 7).unwrap(), 14);
        booking.status = BookingStatus::Confirmed;
        store.insert_booking(&booking).await.unwrap();

        let mut completed = booking.clone();
        completed.status = BookingStatus::Completed;
        let mut cancelled = booking.clone();
        cancelled.status = BookingStatus::Cancelled;

        store.update_booking(&completed).await.unwrap();
        let err = store.update_booking(&cancelled).await.unwrap_err();
        assert!(matches!(
            err,
            BackofficeError::InvalidTransition {
                from: BookingStatus::Completed,
                to: BookingStatus::Cancelled,
            }
        ));
        assert_eq!(
            store.find_booking(booking.id).await.unwrap().unwrap().status,
            BookingStatus::Completed
        );
    }

    #[tokio::test]
    async fn test_update_missing_booking_is_not_found() {
        let store = InMemoryStore::new();
        let booking = booking_at(NaiveDate::from_ymd_opt(2030, 1, 7).unwrap(), 9);
        assert!(matches!(
            store.update_booking(&booking).await,
            Err(BackofficeError::NotFound("Booking"))
        ));
        assert!(!store.delete_booking(booking.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_message_filter_by_status() {
        let store = InMemoryStore::new();
        let mut read = Message::new(NewMessage {
            reference_id: "CT-1".to_string(),
            ..Default::default()
        });
        read.status = MessageStatus::Read;
        store.insert_message(&read).await.unwrap();
        store
            .insert_message(&Message::new(NewMessage {
                reference_id: "CT-2".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap();

        let unread = store.list_messages(Some(MessageStatus::New)).await.unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].reference_id, "CT-2");
        assert_eq!(store.list_messages(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_data_and_diagnostics() {
        let store = InMemoryStore::with_mock_data();
        let counts = store.record_counts().await.unwrap();
        assert!(counts.bookings > 0);
        assert!(counts.jobs > 0);
        assert!(counts.messages > 0);

        store.round_trip_probe().await.unwrap();
        assert_eq!(store.backend_name(), "in-memory");
    }

    #[tokio::test]
    async fn test_mock_jobs_hide_inactive() {
        let store = InMemoryStore::with_mock_data();
        let public = store.list_jobs(false).await.unwrap();
        let all = store.list_jobs(true).await.unwrap();
        assert!(public.iter().all(|j| j.is_active));
        assert!(all.len() > public.len());
    }
}
