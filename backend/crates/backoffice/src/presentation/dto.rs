//! Request / response bodies

use serde::{Deserialize, Serialize};

use crate::application::{BookingUpdate, JobUpdate, NewBookingInput, NewJobInput};
use crate::domain::value_objects::{BookingStatus, EmploymentType, MessageStatus};

/// Collection response
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

// ============================================================================
// Bookings
// ============================================================================

/// Missing fields deserialize as empty and are reported by validation
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub notes: Option<String>,
}

impl From<CreateBookingRequest> for NewBookingInput {
    fn from(req: CreateBookingRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            company: req.company,
            service: req.service,
            preferred_date: req.preferred_date,
            preferred_time: req.preferred_time,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub status: Option<BookingStatus>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub notes: Option<String>,
}

impl From<UpdateBookingRequest> for BookingUpdate {
    fn from(req: UpdateBookingRequest) -> Self {
        Self {
            status: req.status,
            preferred_date: req.preferred_date,
            preferred_time: req.preferred_time,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,
}

// ============================================================================
// Careers
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobListQuery {
    pub include_inactive: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub slug: Option<String>,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub description: String,
    pub requirements: Vec<String>,
    /// Defaults to `true`
    pub is_active: Option<bool>,
}

impl From<CreateJobRequest> for NewJobInput {
    fn from(req: CreateJobRequest) -> Self {
        Self {
            title: req.title,
            slug: req.slug,
            department: req.department,
            location: req.location,
            employment_type: req.employment_type,
            description: req.description,
            requirements: req.requirements,
            is_active: req.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl From<UpdateJobRequest> for JobUpdate {
    fn from(req: UpdateJobRequest) -> Self {
        Self {
            title: req.title,
            slug: req.slug,
            department: req.department,
            location: req.location,
            employment_type: req.employment_type,
            description: req.description,
            requirements: req.requirements,
            is_active: req.is_active,
        }
    }
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct MessageListQuery {
    pub status: Option<MessageStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub status: MessageStatus,
}
