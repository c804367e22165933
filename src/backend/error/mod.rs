//! Backend Error Module
//!
//! This module defines the error taxonomy of the authentication backend and
//! its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - AuthError, ValidationError
//! └── conversion.rs - IntoResponse and the JSON error envelope
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::error::AuthError;
//! use axum::response::Response;
//!
//! # async fn example() -> Result<Response, AuthError> {
//! // Handlers return AuthError directly
//! Err(AuthError::InvalidToken)
//! # }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorBody;
pub use types::{AuthError, ValidationError};
