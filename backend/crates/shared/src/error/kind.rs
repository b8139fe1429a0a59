//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// Error classification used by every handler in the back-office.
///
/// Each variant maps to exactly one HTTP status code. The site only ever
/// answers with the statuses listed here.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::TooManyRequests;
/// assert_eq!(kind.status_code(), 429);
/// assert_eq!(kind.as_str(), "Too Many Requests");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - malformed JSON or failed form validation
    BadRequest,
    /// 401 - missing or invalid admin token, wrong credentials
    Unauthorized,
    /// 403 - admin lacks the permission for the route
    Forbidden,
    /// 404 - record does not exist
    NotFound,
    /// 409 - booking slot taken, duplicate job slug
    Conflict,
    /// 422 - well-formed but semantically unusable input
    UnprocessableEntity,
    /// 429 - contact form rate limit hit
    TooManyRequests,
    /// 500 - anything unexpected
    InternalServerError,
    /// 503 - store temporarily unusable
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code for this kind
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Standard reason phrase
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// 5xx kinds. These are logged at error level and get support contact info.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx kinds
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
