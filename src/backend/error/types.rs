/**
 * Backend Error Types
 *
 * This module defines the closed set of errors the authentication backend
 * can produce. Every variant maps to exactly one HTTP status in
 * `status_code`, and `conversion` renders them with one exhaustive match.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * - `MissingField` - a required request field was absent (400)
 * - `Validation` - user data broke a schema rule (400)
 *
 * ## Authentication Errors
 *
 * - `IncorrectPassword` / `UserNotFound` - bad credentials (401, identical body)
 * - `InvalidToken` - signature, shape or expiry check failed (401)
 *
 * ## Internal Errors
 *
 * - `Verification` - a stored hash is malformed (500, data-integrity bug)
 * - `TokenIssue`, `Database`, `Internal` - infrastructure failures (500)
 */

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::backend::auth::users::StoreError;
use crate::shared::{SharedError, ValidationFailure};

/// Public message attached to every wrapped validation failure
pub const VALIDATION_MESSAGE: &str = "Not able to validate the data sent in the request";

/// Uniform, client-facing shape of a multi-field validation failure
///
/// Only obtainable through `TryFrom<ValidationFailure>`; the fields are read
/// through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{name}: {message}")]
pub struct ValidationError {
    name: String,
    message: String,
    explanation: Vec<String>,
    #[serde(skip)]
    status_code: StatusCode,
}

impl ValidationError {
    /// Name of the wrapped failure
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Public message shown to the client
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Per-field messages, in the order the failure listed them
    pub fn explanation(&self) -> &[String] {
        &self.explanation
    }

    /// HTTP status for this error (always 400)
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }
}

impl TryFrom<ValidationFailure> for ValidationError {
    type Error = SharedError;

    /// Wrap a lower-level failure
    ///
    /// Fails with `SharedError::MissingFieldList` when the failure has no
    /// field list to explain.
    fn try_from(failure: ValidationFailure) -> Result<Self, Self::Error> {
        let explanation = failure
            .messages()
            .ok_or_else(|| SharedError::missing_field_list(&failure.name))?;

        Ok(Self {
            name: failure.name,
            message: VALIDATION_MESSAGE.to_string(),
            explanation,
            status_code: StatusCode::BAD_REQUEST,
        })
    }
}

/// Authentication backend errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required request field is missing
    #[error("Missing field: {reason}")]
    MissingField {
        /// Client-facing reason
        reason: String,
    },

    /// The password does not match the stored hash
    #[error("Incorrect password")]
    IncorrectPassword,

    /// No user matches the lookup (email at sign-in, id from a token)
    ///
    /// `lookup` is for logs only; it never reaches a response body.
    #[error("No user found for {lookup}")]
    UserNotFound {
        /// What was looked up
        lookup: String,
    },

    /// The token failed signature, shape or expiry checks
    #[error("Invalid token")]
    InvalidToken,

    /// User data failed schema validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A stored password hash could not be parsed
    #[error("Password could not be verified: {0}")]
    Verification(#[source] bcrypt::BcryptError),

    /// Signing a token failed
    #[error("Token could not be issued: {0}")]
    TokenIssue(#[source] jsonwebtoken::errors::Error),

    /// Credential store query failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other server-side defect
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl AuthError {
    /// Create a new missing-field error
    pub fn missing_field(reason: impl Into<String>) -> Self {
        Self::MissingField {
            reason: reason.into(),
        }
    }

    /// Create a new user-not-found error
    pub fn user_not_found(lookup: impl Into<String>) -> Self {
        Self::UserNotFound {
            lookup: lookup.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `MissingField`, `Validation` - 400 Bad Request
    /// - `IncorrectPassword`, `UserNotFound`, `InvalidToken` - 401 Unauthorized
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField { .. } => StatusCode::BAD_REQUEST,
            Self::Validation(err) => err.status_code(),
            Self::IncorrectPassword | Self::UserNotFound { .. } | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::Verification(_)
            | Self::TokenIssue(_)
            | Self::Database(_)
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SharedError> for AuthError {
    fn from(err: SharedError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<ValidationFailure> for AuthError {
    fn from(failure: ValidationFailure) -> Self {
        match ValidationError::try_from(failure) {
            Ok(validation) => Self::Validation(validation),
            Err(shared) => shared.into(),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(failure) => failure.into(),
            StoreError::Database(err) => Self::Database(err),
        }
    }
}
