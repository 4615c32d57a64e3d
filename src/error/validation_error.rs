//! Validation failure type.
//!
//! This module provides [`ValidationError`], the terminal signal returned by
//! [`Validate`](crate::Validate) implementations and surfaced unchanged by
//! [`check`](crate::check()).

use thiserror::Error;

/// A validation failure carrying a human-readable message.
///
/// `ValidationError` is the only error kind this crate produces. It carries
/// no code, severity or location: the message is everything a caller gets.
///
/// # Example
///
/// ```rust
/// use validity::ValidationError;
///
/// let error = ValidationError::new("name is required");
///
/// assert_eq!(error.message(), "name is required");
/// assert_eq!(error.to_string(), "name is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if `err` is a validation failure.
    ///
    /// Equivalent to [`is_validation_error`].
    pub fn is(err: &(dyn std::error::Error + 'static)) -> bool {
        err.downcast_ref::<Self>().is_some()
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Returns true if `err` is a [`ValidationError`].
///
/// Lets callers branch on "the value was rejected" versus "something else
/// went wrong" when both travel through the same error channel.
///
/// # Example
///
/// ```rust
/// use validity::{is_validation_error, ValidationError};
///
/// let rejected: Box<dyn std::error::Error> = Box::new(ValidationError::new("too short"));
/// assert!(is_validation_error(&*rejected));
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// assert!(!is_validation_error(&io));
/// ```
pub fn is_validation_error(err: &(dyn std::error::Error + 'static)) -> bool {
    ValidationError::is(err)
}

// Failures cross thread boundaries inside host error types.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let error = ValidationError::new("field is required");
        assert_eq!(error.message(), "field is required");
    }

    #[test]
    fn test_validation_error_display_is_message() {
        let error = ValidationError::new("must be positive");
        assert_eq!(error.to_string(), "must be positive");
    }

    #[test]
    fn test_validation_error_from_string() {
        let from_owned: ValidationError = String::from("bad").into();
        let from_borrowed: ValidationError = "bad".into();
        assert_eq!(from_owned, from_borrowed);
    }

    #[test]
    fn test_is_validation_error() {
        let error = ValidationError::new("invalid");
        assert!(is_validation_error(&error));
        assert!(ValidationError::is(&error));
    }

    #[test]
    fn test_is_validation_error_rejects_other_errors() {
        let error = std::fmt::Error;
        assert!(!is_validation_error(&error));
    }

    #[test]
    fn test_is_validation_error_through_box() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(ValidationError::new("invalid"));
        assert!(is_validation_error(&*boxed));
    }
}
