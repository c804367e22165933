//! Shared Module
//!
//! This module contains types that do not depend on the server stack. They
//! describe validation failures raised below the authentication flow and are
//! usable by any adapter (store, service, client).

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::{FieldViolation, SharedError, ValidationFailure};
