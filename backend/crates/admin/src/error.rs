//! Admin Error Types
//!
//! Admin-specific error variants that render through the unified
//! `kernel::error::AppError` system.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::permission::Permission;

/// Admin-specific result type alias
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin-specific error variants
#[derive(Debug, Error)]
pub enum AdminError {
    /// Malformed login request
    #[error("{0}")]
    InvalidRequest(String),

    /// Unknown user, wrong password or disabled account
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Missing, tampered or expired session token
    #[error("Admin session is missing or has expired")]
    SessionInvalid,

    /// Session lacks the permission for this operation
    #[error("Missing permission: {0}")]
    PermissionDenied(Permission),

    /// Too many login attempts from one client
    #[error("Too many login attempts")]
    TooManyAttempts { retry_after_secs: u64 },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AdminError::InvalidCredentials | AdminError::SessionInvalid => {
                StatusCode::UNAUTHORIZED
            }
            AdminError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            AdminError::TooManyAttempts { .. } => StatusCode::TOO_MANY_REQUESTS,
            AdminError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdminError::InvalidRequest(_) => ErrorKind::BadRequest,
            AdminError::InvalidCredentials | AdminError::SessionInvalid => {
                ErrorKind::Unauthorized
            }
            AdminError::PermissionDenied(_) => ErrorKind::Forbidden,
            AdminError::TooManyAttempts { .. } => ErrorKind::TooManyRequests,
            AdminError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AdminError::SessionInvalid => err.with_action("Please sign in again"),
            AdminError::TooManyAttempts { retry_after_secs } => {
                err.with_action(format!("Please wait {retry_after_secs} seconds and try again"))
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AdminError::Internal(msg) => {
                tracing::error!(message = %msg, "Admin internal error");
            }
            AdminError::InvalidCredentials => {
                tracing::warn!("Invalid admin login attempt");
            }
            AdminError::TooManyAttempts { retry_after_secs } => {
                tracing::warn!(retry_after_secs, "Admin login rate limit exceeded");
            }
            AdminError::PermissionDenied(permission) => {
                tracing::warn!(%permission, "Admin permission denied");
            }
            _ => {
                tracing::debug!(error = %self, "Admin error");
            }
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        self.log();
        let mut response = self.to_app_error().into_response();
        if let AdminError::TooManyAttempts { retry_after_secs } = self {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
        }
        response
    }
}

impl From<AppError> for AdminError {
    fn from(err: AppError) -> Self {
        AdminError::Internal(err.to_string())
    }
}

impl From<platform::rate_limit::RateLimitError> for AdminError {
    fn from(err: platform::rate_limit::RateLimitError) -> Self {
        AdminError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Internal(format!("Session serialization failed: {err}"))
    }
}
