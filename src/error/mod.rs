//! Error types for validation failures.
//!
//! This module provides the single failure kind produced by traversal,
//! [`ValidationError`], and the predicate that tells it apart from other
//! errors in a host application.

mod validation_error;

pub use validation_error::{is_validation_error, ValidationError};
