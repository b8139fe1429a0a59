//! Bookings Use Case
//!
//! Public booking requests plus admin management. A slot (date + time) can
//! be held by at most one pending or confirmed booking.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use kernel::error::field::FieldErrors;
use kernel::id::BookingId;
use platform::text::{
    char_len, is_valid_email, is_valid_phone, sanitize_email, sanitize_optional, sanitize_text,
};

use crate::domain::entities::Booking;
use crate::domain::repository::BookingRepository;
use crate::domain::value_objects::{BookingStatus, parse_date, parse_time};
use crate::error::{BackofficeError, BackofficeResult};

const MAX_NOTES_LEN: usize = 2000;

/// Booking request as submitted by a visitor
#[derive(Debug, Clone, Default)]
pub struct NewBookingInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: String,
    /// `YYYY-MM-DD`
    pub preferred_date: String,
    /// `HH:MM`
    pub preferred_time: String,
    pub notes: Option<String>,
}

/// Admin changes to a booking; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct BookingUpdate {
    pub status: Option<BookingStatus>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub notes: Option<String>,
}

pub struct BookingsUseCase<R>
where
    R: BookingRepository,
{
    repo: Arc<R>,
}

impl<R> BookingsUseCase<R>
where
    R: BookingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a pending booking; dates before `today` are rejected
    pub async fn create_at(
        &self,
        input: NewBookingInput,
        today: NaiveDate,
    ) -> BackofficeResult<Booking> {
        let mut errors = FieldErrors::new();

        let name = sanitize_text(&input.name);
        if errors.require("name", &name) {
            errors.check(
                (2..=100).contains(&char_len(&name)),
                "name",
                "name must be between 2 and 100 characters",
            );
        }

        let email = sanitize_email(&input.email);
        if errors.require("email", &email) {
            errors.check(is_valid_email(&email), "email", "email address is invalid");
        }

        let phone = sanitize_optional(input.phone.as_deref());
        if let Some(phone) = &phone {
            errors.check(is_valid_phone(phone), "phone", "phone number is invalid");
        }

        let company = sanitize_optional(input.company.as_deref());
        if let Some(company) = &company {
            errors.check(
                char_len(company) <= 100,
                "company",
                "company must be at most 100 characters",
            );
        }

        let service = sanitize_text(&input.service);
        if errors.require("service", &service) {
            errors.check(
                char_len(&service) <= 100,
                "service",
                "service must be at most 100 characters",
            );
        }

        let notes = sanitize_optional(input.notes.as_deref());
        if let Some(notes) = &notes {
            errors.check(
                char_len(notes) <= MAX_NOTES_LEN,
                "notes",
                format!("notes must be at most {MAX_NOTES_LEN} characters"),
            );
        }

        let date = check_date(&mut errors, &input.preferred_date, today);
        let time = check_time(&mut errors, &input.preferred_time);

        errors.into_result().map_err(BackofficeError::Validation)?;
        let (Some(preferred_date), Some(preferred_time)) = (date, time) else {
            return Err(BackofficeError::Internal(
                "Validated booking is missing its schedule".to_string(),
            ));
        };

        let now = Utc::now();
        let booking = Booking {
            id: BookingId::new(),
            name,
            email,
            phone,
            company,
            service,
            preferred_date,
            preferred_time,
            notes,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.repo.insert_booking(&booking).await?;

        tracing::info!(
            booking_id = %booking.id,
            date = %booking.preferred_date,
            time = %booking.preferred_time.format("%H:%M"),
            "Booking requested"
        );

        Ok(booking)
    }

    pub async fn create(&self, input: NewBookingInput) -> BackofficeResult<Booking> {
        self.create_at(input, Utc::now().date_naive()).await
    }

    pub async fn list(&self, status: Option<BookingStatus>) -> BackofficeResult<Vec<Booking>> {
        self.repo.list_bookings(status).await
    }

    pub async fn get(&self, id: BookingId) -> BackofficeResult<Booking> {
        self.repo
            .find_booking(id)
            .await?
            .ok_or(BackofficeError::NotFound("Booking"))
    }

    /// Apply an admin update; rescheduling re-checks the slot
    pub async fn update_at(
        &self,
        id: BookingId,
        update: BookingUpdate,
        today: NaiveDate,
    ) -> BackofficeResult<Booking> {
        let mut booking = self.get(id).await?;

        if let Some(next) = update.status {
            if !booking.status.can_transition_to(next) {
                return Err(BackofficeError::InvalidTransition {
                    from: booking.status,
                    to: next,
                });
            }
        }

        let mut errors = FieldErrors::new();
        let date = update
            .preferred_date
            .as_deref()
            .and_then(|raw| check_date(&mut errors, raw, today));
        let time = update
            .preferred_time
            .as_deref()
            .and_then(|raw| check_time(&mut errors, raw));
        let notes = update
            .notes
            .as_deref()
            .map(|raw| sanitize_optional(Some(raw)));
        if let Some(Some(notes)) = &notes {
            errors.check(
                char_len(notes) <= MAX_NOTES_LEN,
                "notes",
                format!("notes must be at most {MAX_NOTES_LEN} characters"),
            );
        }
        errors.into_result().map_err(BackofficeError::Validation)?;

        let previous = booking.status;
        if let Some(status) = update.status {
            booking.status = status;
        }
        if let Some(date) = date {
            booking.preferred_date = date;
        }
        if let Some(time) = time {
            booking.preferred_time = time;
        }
        if let Some(notes) = notes {
            booking.notes = notes;
        }
        booking.touch();

        self.repo.update_booking(&booking).await?;

        tracing::info!(
            booking_id = %booking.id,
            from = %previous,
            to = %booking.status,
            "Booking updated"
        );

        Ok(booking)
    }

    pub async fn update(&self, id: BookingId, update: BookingUpdate) -> BackofficeResult<Booking> {
        self.update_at(id, update, Utc::now().date_naive()).await
    }

    pub async fn delete(&self, id: BookingId) -> BackofficeResult<()> {
        if !self.repo.delete_booking(id).await? {
            return Err(BackofficeError::NotFound("Booking"));
        }
        tracing::info!(booking_id = %id, "Booking deleted");
        Ok(())
    }
}

fn check_date(errors: &mut FieldErrors, raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    if !errors.require("preferredDate", raw.trim()) {
        return None;
    }
    match parse_date(raw) {
        Some(date) if date < today => {
            errors.push("preferredDate", "preferredDate cannot be in the past");
            None
        }
        Some(date) => Some(date),
        None => {
            errors.push("preferredDate", "preferredDate must be YYYY-MM-DD");
            None
        }
    }
}

fn check_time(errors: &mut FieldErrors, raw: &str) -> Option<chrono::NaiveTime> {
    if !errors.require("preferredTime", raw.trim()) {
        return None;
    }
    let time = parse_time(raw);
    errors.check(time.is_some(), "preferredTime", "preferredTime must be HH:MM");
    time
}
