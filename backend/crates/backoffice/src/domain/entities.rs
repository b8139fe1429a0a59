//! Domain Entities
//!
//! Records managed from the back-office. They serialize directly as API
//! response bodies (camelCase).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use kernel::id::{BookingId, JobId, MessageId};
use serde::Serialize;

use crate::domain::value_objects::{BookingStatus, EmploymentType, MessageStatus, hhmm};

// ============================================================================
// Booking
// ============================================================================

/// Consultation booking requested from the public site
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: String,
    pub preferred_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub preferred_time: NaiveTime,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Whether this booking blocks `date`/`time` for other visitors
    pub fn occupies(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.status.holds_slot() && self.preferred_date == date && self.preferred_time == time
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Job posting
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub slug: String,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub description: String,
    pub requirements: Vec<String>,
    pub is_active: bool,
    pub posted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobPosting {
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Message
// ============================================================================

/// Inbound message (contact form submission)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub reference_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub budget: Option<String>,
    pub service: Option<String>,
    pub body: String,
    pub status: MessageStatus,
    pub client_ip: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a message before it is stored
#[derive(Debug, Clone, Default)]
pub struct NewMessage {
    pub reference_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub budget: Option<String>,
    pub service: Option<String>,
    pub body: String,
    pub client_ip: Option<String>,
}

impl Message {
    pub fn new(fields: NewMessage) -> Self {
        let now = Utc::now();
        Self {
            id: MessageId::new(),
            reference_id: fields.reference_id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            company: fields.company,
            website: fields.website,
            budget: fields.budget,
            service: fields.service,
            body: fields.body,
            status: MessageStatus::New,
            client_ip: fields.client_ip,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
