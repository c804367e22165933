/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the sign-up, sign-in,
 * authentication and current-user handlers.
 */

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;

/// Sign-up and sign-in request
///
/// Presence of both fields is enforced by `validate_user_auth` before the
/// handler runs.
#[derive(Deserialize, Serialize, Clone)]
pub struct CredentialsRequest {
    /// User's email address
    pub email: String,
    /// User's password (never stored or logged as-is)
    pub password: String,
}

impl fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Sign-in response
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication
    pub token: String,
}

/// Token check response
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthenticatedResponse {
    /// ID of the user the token belongs to
    pub id: Uuid,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID
    pub id: Uuid,
    /// User's email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}
