//! # Validity
//!
//! Recursive validation of in-memory value graphs that stops at the first
//! failure.
//!
//! ## Overview
//!
//! Given one or more values, validity walks their structure (through boxes,
//! references and nullable slots, into sequences and records) and runs the
//! [`Validate`] check of every part that has one. Children are checked
//! before their parent, in index or declaration order, and the first
//! failure ends the walk.
//!
//! Types take part by implementing [`Node`], which describes their shape
//! and exposes their elements or fields. The [`node!`] macro covers the
//! common cases.
//!
//! ## Core Types
//!
//! - [`Validate`]: The capability a type implements to check itself
//! - [`Node`]: How a value is laid out for traversal
//! - [`ValidationError`]: The single failure kind, carrying a message
//! - [`check()`] / [`check!`]: The traversal entry point
//!
//! ## Example
//!
//! ```rust
//! use validity::{check, node, Validate, ValidationError};
//!
//! #[derive(Default)]
//! struct Email(String);
//!
//! impl Validate for Email {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         if !self.0.contains('@') {
//!             return Err(ValidationError::new("email must contain @"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Default)]
//! struct User {
//!     email: Email,
//!     backup: Option<Email>,
//! }
//!
//! node!(Email: validate);
//! node!(User { "Email" => email, "Backup" => backup });
//!
//! let mut user = User {
//!     email: Email("ada@example.com".into()),
//!     backup: Some(Email("ada@example.org".into())),
//! };
//! assert!(check!(user).is_ok());
//!
//! // An empty slot inside a value is filled with its default and checked.
//! user.backup = None;
//! let err = check!(user).unwrap_err();
//! assert_eq!(err.message(), "email must contain @");
//! assert!(user.backup.is_some());
//! ```
//!
//! ## Mutation and threads
//!
//! Checking takes `&mut` access because empty slots reached during descent
//! are filled in place. Callers checking shared data serialize access
//! themselves; the crate does no locking.

pub mod error;
mod macros;
pub mod node;
pub mod resolve;
pub mod traverse;
pub mod visibility;

pub use error::{is_validation_error, ValidationError};
pub use node::{AsNode, Node, Shape, Validate};
pub use resolve::resolve;
pub use traverse::{check, Elements, Fields};
pub use visibility::{is_public_field, Visibility};

/// Outcome of a validation check: nothing on success, the first failure
/// otherwise.
pub type ValidationResult = Result<(), ValidationError>;
