/**
 * Sign-up Handler
 *
 * This module implements the user registration handler for POST /api/v1/signup.
 *
 * # Registration Process
 *
 * 1. `validate_user_auth` rejects bodies without email or password
 * 2. Validate email format and password length
 * 3. Hash password using bcrypt
 * 4. Create user in the credential store
 *
 * # Validation
 *
 * - Email must contain '@' character (basic validation)
 * - Password must be 3 to 100 characters long
 * - Email must be unique
 *
 * Failures come back as 400 with one explanation line per broken rule.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::backend::middleware::validate::Credentials;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - If the credential breaks a rule or the email is taken
/// * `500 Internal Server Error` - If password hashing or the store fails
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "email": "user@example.com"
/// }
/// ```
pub async fn signup(
    State(auth): State<AuthService>,
    Credentials(request): Credentials,
) -> Result<(StatusCode, Json<UserResponse>), AuthError> {
    tracing::info!("Sign-up request for email: {}", request.email);

    let user = auth.sign_up(&request.email, &request.password).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
