//! Required-field checks run before a request reaches the store.

use crate::error::AppError;

pub struct RequestValidator;

impl RequestValidator {
    /// A field counts as missing when absent or empty.
    pub fn is_present(value: &Option<String>) -> bool {
        value.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Fail with `message` unless every field is present.
    pub fn require_all(values: &[&Option<String>], message: &str) -> Result<(), AppError> {
        if values.iter().all(|v| Self::is_present(v)) {
            Ok(())
        } else {
            Err(AppError::Validation(message.to_string()))
        }
    }

    /// Fail with `message` when a required string is empty.
    pub fn require(value: &str, message: &str) -> Result<(), AppError> {
        if value.is_empty() {
            Err(AppError::Validation(message.to_string()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_are_missing() {
        assert!(!RequestValidator::is_present(&Some(String::new())));
        assert!(!RequestValidator::is_present(&None));
        assert!(RequestValidator::is_present(&Some("x".into())));
    }

    #[test]
    fn require_all_reports_message() {
        let name = Some("Ana".to_string());
        let email = None;
        let err = RequestValidator::require_all(&[&name, &email], "Name and email are required")
            .unwrap_err();
        assert_eq!(err.to_string(), "Name and email are required");
    }

    #[test]
    fn require_rejects_empty() {
        assert!(RequestValidator::require("", "Email is required").is_err());
        assert!(RequestValidator::require("a@b.c", "Email is required").is_ok());
    }
}
