//! Error conversions - From implementations and HTTP rendering
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Forbidden,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_request(format!("Invalid JSON body: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
            .with_action("Send a valid JSON body with Content-Type: application/json")
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let this = if self.action().is_none() {
            self.with_support_contact(super::support::support_contact())
        } else {
            self
        };

        // RFC 7807 Problem Details, plus `errors` for field validation
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", this.status_code()),
            "title": this.kind().as_str(),
            "status": this.status_code(),
            "detail": this.message(),
            "action": this.action(),
            "errors": this.details(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let app_err: AppError = io_err.into();
        assert_eq!(app_err.kind(), ErrorKind::Forbidden);

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let app_err: AppError = io_err.into();
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_into_response_status() {
        use crate::error::field::FieldError;
        use axum::response::IntoResponse;

        let response = AppError::bad_request("Validation failed")
            .with_details(vec![FieldError::required("email")])
            .into_response();
        assert_eq!(response.status().as_u16(), 400);

        let response = AppError::too_many_requests("Slow down").into_response();
        assert_eq!(response.status().as_u16(), 429);
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_server_error_body_carries_support_contact() {
        use axum::response::IntoResponse;

        let response = AppError::internal("Something went wrong").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["status"], 500);
        assert!(
            body["action"]
                .as_str()
                .unwrap()
                .contains(crate::error::support::support_contact())
        );
    }
}
