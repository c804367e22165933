/**
 * Error Conversion
 *
 * This module renders backend errors as HTTP responses.
 *
 * # Response Format
 *
 * Every error response uses the same envelope:
 * ```json
 * {
 *   "message": "Something went wrong",
 *   "success": false,
 *   "data": {},
 *   "err": "Email and password are required"
 * }
 * ```
 *
 * `IncorrectPassword` and `UserNotFound` render the same body so a client
 * cannot tell a wrong password from an unknown account. Internal errors are
 * logged here and replaced with a generic `err`.
 */

use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::{json, Value};

use crate::backend::error::types::AuthError;

/// Generic envelope message for failed requests
pub const FAILURE_MESSAGE: &str = "Something went wrong";

/// Shared `err` for both credential failures
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Summary message
    pub message: String,
    /// Always `false`
    pub success: bool,
    /// Always an empty object
    pub data: Value,
    /// Reason (string or explanation list)
    pub err: Value,
}

impl ErrorBody {
    fn new(message: impl Into<String>, err: Value) -> Self {
        Self {
            message: message.into(),
            success: false,
            data: json!({}),
            err,
        }
    }
}

impl From<&AuthError> for ErrorBody {
    fn from(error: &AuthError) -> Self {
        match error {
            AuthError::MissingField { reason } => Self::new(FAILURE_MESSAGE, json!(reason)),
            AuthError::IncorrectPassword | AuthError::UserNotFound { .. } => {
                Self::new(FAILURE_MESSAGE, json!(INVALID_CREDENTIALS))
            }
            AuthError::InvalidToken => Self::new(FAILURE_MESSAGE, json!("Invalid token")),
            AuthError::Validation(validation) => {
                Self::new(validation.message(), json!(validation.explanation()))
            }
            AuthError::Verification(_)
            | AuthError::TokenIssue(_)
            | AuthError::Database(_)
            | AuthError::Internal { .. } => {
                Self::new(FAILURE_MESSAGE, json!("Internal server error"))
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
