//! Field-level validation errors

use serde::Serialize;
use std::fmt;

/// One rejected input field and the reason, as shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// `<field> is required`
    pub fn required(field: &str) -> Self {
        Self::new(field, format!("{field} is required"))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collects every failing field so a form is rejected once, with all reasons
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    /// Record `message` for `field` unless `ok`. Returns `ok`.
    pub fn check(&mut self, ok: bool, field: &str, message: impl Into<String>) -> bool {
        if !ok {
            self.push(field, message);
        }
        ok
    }

    /// Record "`field` is required" when `value` is empty. Returns whether it was present.
    pub fn require(&mut self, field: &str, value: &str) -> bool {
        if value.is_empty() {
            self.0.push(FieldError::required(field));
            return false;
        }
        true
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message() {
        assert_eq!(FieldError::required("email").message, "email is required");
    }

    #[test]
    fn test_field_errors_collects_all() {
        let mut errors = FieldErrors::new();
        assert!(!errors.require("name", ""));
        assert!(errors.require("email", "a@b.co"));
        assert!(!errors.check(false, "message", "message is too short"));
        assert!(errors.check(true, "phone", "unused"));

        assert_eq!(errors.len(), 2);
        assert!(errors.has("name"));
        assert!(!errors.has("email"));

        let details = errors.into_result().unwrap_err();
        assert_eq!(details[0], FieldError::required("name"));
        assert_eq!(details[1].field, "message");

        assert!(FieldErrors::new().into_result().is_ok());
    }
}
