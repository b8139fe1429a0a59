//! Backoffice Error Types
//!
//! Backoffice-specific error variants that render through the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{NaiveDate, NaiveTime};
use kernel::error::{app_error::AppError, field::FieldError, kind::ErrorKind};
use thiserror::Error;

use admin::AdminError;

use crate::domain::value_objects::BookingStatus;

/// Backoffice-specific result type alias
pub type BackofficeResult<T> = Result<T, BackofficeError>;

/// Backoffice-specific error variants
#[derive(Debug, Error)]
pub enum BackofficeError {
    /// One or more fields failed validation
    #[error("Please correct the highlighted fields")]
    Validation(Vec<FieldError>),

    /// Record does not exist (or is hidden from the caller)
    #[error("{0} not found")]
    NotFound(&'static str),

    /// An active booking already holds the slot
    #[error("The {date} {slot} slot is already booked", slot = .time.format("%H:%M"))]
    SlotTaken { date: NaiveDate, time: NaiveTime },

    /// Another job posting uses the slug
    #[error("A job posting with slug '{0}' already exists")]
    SlugTaken(String),

    /// Booking status change not allowed
    #[error("Cannot change booking status from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Authentication / authorization failure
    #[error(transparent)]
    Admin(#[from] AdminError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackofficeError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        BackofficeError::Validation(vec![FieldError::new(field, message)])
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BackofficeError::Validation(_) => StatusCode::BAD_REQUEST,
            BackofficeError::NotFound(_) => StatusCode::NOT_FOUND,
            BackofficeError::SlotTaken { .. }
            | BackofficeError::SlugTaken(_)
            | BackofficeError::InvalidTransition { .. } => StatusCode::CONFLICT,
            BackofficeError::Admin(err) => err.status_code(),
            BackofficeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BackofficeError::Validation(_) => ErrorKind::BadRequest,
            BackofficeError::NotFound(_) => ErrorKind::NotFound,
            BackofficeError::SlotTaken { .. }
            | BackofficeError::SlugTaken(_)
            | BackofficeError::InvalidTransition { .. } => ErrorKind::Conflict,
            BackofficeError::Admin(err) => err.kind(),
            BackofficeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            BackofficeError::Validation(details) => {
                AppError::new(self.kind(), self.to_string()).with_details(details.clone())
            }
            BackofficeError::SlotTaken { .. } => AppError::new(self.kind(), self.to_string())
                .with_action("Please choose another date or time"),
            BackofficeError::Admin(err) => err.to_app_error(),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BackofficeError::Internal(msg) => {
                tracing::error!(message = %msg, "Backoffice internal error");
            }
            BackofficeError::Validation(details) => {
                tracing::debug!(fields = details.len(), "Backoffice validation failed");
            }
            _ => {
                tracing::debug!(error = %self, "Backoffice error");
            }
        }
    }
}

impl IntoResponse for BackofficeError {
    fn into_response(self) -> Response {
        match self {
            BackofficeError::Admin(err) => err.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}

impl From<AppError> for BackofficeError {
    fn from(err: AppError) -> Self {
        BackofficeError::Internal(err.to_string())
    }
}
