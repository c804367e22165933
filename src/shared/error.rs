//! Shared Error Types
//!
//! This module defines the lower-level validation failure produced when user
//! data is checked against the schema rules (sign-up validation, store
//! constraints), plus the errors raised while wrapping such failures.
//!
//! # Error Categories
//!
//! - `FieldViolation` - One rule broken on one field
//! - `ValidationFailure` - A named, multi-field validation failure
//! - `SharedError` - Failures while interpreting the above
//!
//! # Usage
//!
//! ```rust
//! use authgate::shared::error::{FieldViolation, ValidationFailure};
//!
//! let failure = ValidationFailure::new(
//!     "SchemaValidationError",
//!     vec![FieldViolation::new("email", "email must contain '@'")],
//! );
//! assert_eq!(failure.messages().unwrap(), vec!["email must contain '@'"]);
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed rule on a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl FieldViolation {
    /// Create a new field violation
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Multi-field validation failure raised below the auth flow
///
/// `errors` is optional because not every producer attaches a field list;
/// code wrapping a failure for the HTTP boundary must treat a missing list
/// as a defect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}: validation failed")]
pub struct ValidationFailure {
    /// Name of the failure kind (e.g. `UniqueConstraintError`)
    pub name: String,
    /// Ordered per-field violations, if the producer supplied them
    pub errors: Option<Vec<FieldViolation>>,
}

impl ValidationFailure {
    /// Create a failure carrying a field list
    pub fn new(name: impl Into<String>, errors: Vec<FieldViolation>) -> Self {
        Self {
            name: name.into(),
            errors: Some(errors),
        }
    }

    /// Create a failure without a field list
    pub fn without_fields(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            errors: None,
        }
    }

    /// Per-field messages in order, or `None` when no field list is attached
    pub fn messages(&self) -> Option<Vec<String>> {
        self.errors
            .as_ref()
            .map(|errors| errors.iter().map(|violation| violation.message.clone()).collect())
    }
}

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A validation failure arrived without the per-field list needed to
    /// explain it to the client
    #[error("validation failure '{name}' carries no field list")]
    MissingFieldList {
        /// Name of the offending failure
        name: String,
    },
}

impl SharedError {
    /// Create a new missing-field-list error
    pub fn missing_field_list(name: impl Into<String>) -> Self {
        Self::MissingFieldList { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_order() {
        let failure = ValidationFailure::new(
            "SchemaValidationError",
            vec![
                FieldViolation::new("email", "first"),
                FieldViolation::new("password", "second"),
            ],
        );
        assert_eq!(failure.messages().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_without_fields_has_no_messages() {
        let failure = ValidationFailure::without_fields("ConnectionError");
        assert!(failure.messages().is_none());
    }

    #[test]
    fn test_empty_field_list_is_still_a_list() {
        let failure = ValidationFailure::new("SchemaValidationError", Vec::new());
        assert_eq!(failure.messages(), Some(Vec::new()));
    }

    #[test]
    fn test_missing_field_list_display() {
        let error = SharedError::missing_field_list("ConnectionError");
        let display = format!("{}", error);
        assert!(display.contains("ConnectionError"));
        assert!(display.contains("no field list"));
    }
}
