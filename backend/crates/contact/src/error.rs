//! Contact Error Types
//!
//! Contact-specific error variants that render through the unified
//! `kernel::error::AppError` system.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use backoffice::BackofficeError;
use kernel::error::support::support_contact;
use kernel::error::{app_error::AppError, field::FieldError, kind::ErrorKind};
use platform::rate_limit::RateLimitError;
use thiserror::Error;

/// Contact-specific result type alias
pub type ContactResult<T> = Result<T, ContactError>;

#[derive(Debug, Error)]
pub enum ContactError {
    /// One or more form fields failed validation
    #[error("Please correct the highlighted fields")]
    Validation(Vec<FieldError>),

    /// Too many submissions from one client
    #[error("Too many messages sent from your network")]
    TooManyRequests { retry_after_secs: u64 },

    /// Message could not be stored
    #[error("Failed to store message: {0}")]
    Storage(#[from] BackofficeError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContactError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            ContactError::Storage(_) | ContactError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactError::Validation(_) => ErrorKind::BadRequest,
            ContactError::TooManyRequests { .. } => ErrorKind::TooManyRequests,
            ContactError::Storage(_) | ContactError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError. Server-side details stay in the log.
    pub fn to_app_error(&self) -> AppError {
        match self {
            ContactError::Validation(details) => {
                AppError::new(self.kind(), self.to_string()).with_details(details.clone())
            }
            ContactError::TooManyRequests { retry_after_secs } => {
                AppError::new(self.kind(), self.to_string()).with_action(format!(
                    "Please wait {} minutes before sending another message",
                    retry_after_secs.div_ceil(60)
                ))
            }
            ContactError::Storage(_) | ContactError::Internal(_) => {
                AppError::internal("We could not send your message")
                    .with_support_contact(support_contact())
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContactError::Storage(err) => {
                tracing::error!(error = %err, "Contact message storage failed");
            }
            ContactError::Internal(msg) => {
                tracing::error!(message = %msg, "Contact internal error");
            }
            ContactError::TooManyRequests { retry_after_secs } => {
                tracing::warn!(retry_after_secs, "Contact rate limit exceeded");
            }
            ContactError::Validation(details) => {
                tracing::debug!(fields = details.len(), "Contact form rejected");
            }
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        self.log();
        let mut response = self.to_app_error().into_response();
        if let ContactError::TooManyRequests { retry_after_secs } = self {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
        }
        response
    }
}

impl From<AppError> for ContactError {
    fn from(err: AppError) -> Self {
        ContactError::Internal(err.to_string())
    }
}

impl From<RateLimitError> for ContactError {
    fn from(err: RateLimitError) -> Self {
        ContactError::Internal(err.to_string())
    }
}
