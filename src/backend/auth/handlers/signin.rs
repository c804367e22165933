/**
 * Sign-in Handler
 *
 * This module implements the handler for POST /api/v1/signin.
 *
 * # Authentication Process
 *
 * 1. `validate_user_auth` rejects bodies without email or password
 * 2. Look up user by email
 * 3. Verify password using bcrypt
 * 4. Generate JWT token
 *
 * # Security
 *
 * - Unknown email and wrong password both return 401 with the same body
 * - Passwords are never logged or returned in responses
 */
use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::AuthResponse;
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::backend::middleware::validate::Credentials;

/// Sign-in handler
///
/// # Errors
///
/// * `400 Bad Request` - If email or password is missing (from `validate_user_auth`)
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If the stored hash is malformed or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/v1/signin HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn signin(
    State(auth): State<AuthService>,
    Credentials(request): Credentials,
) -> Result<Json<AuthResponse>, AuthError> {
    tracing::info!("Sign-in request for: {}", request.email);

    let token = auth.sign_in(&request.email, &request.password).await?;

    Ok(Json(AuthResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::test_support::test_auth_service;
    use crate::backend::auth::handlers::types::CredentialsRequest;
    use assert_matches::assert_matches;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials(CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    #[tokio::test]
    async fn test_signin_success() {
        let auth = test_auth_service();
        let user = auth.sign_up("test@example.com", "password123").await.unwrap();

        let response = signin(State(auth.clone()), credentials("test@example.com", "password123"))
            .await
            .unwrap();
        assert!(!response.token.is_empty());
        assert_eq!(auth.tokens().verify(&response.token).unwrap().id, user.id);
    }

    #[tokio::test]
    async fn test_signin_invalid_password() {
        let auth = test_auth_service();
        auth.sign_up("test@example.com", "password123").await.unwrap();

        let result = signin(State(auth), credentials("test@example.com", "wrongpassword")).await;
        assert_matches!(result, Err(AuthError::IncorrectPassword));
    }

    #[tokio::test]
    async fn test_signin_user_not_found() {
        let auth = test_auth_service();

        let request = credentials("nonexistent@example.com", "password123");
        let result = signin(State(auth), request).await;
        assert_matches!(result, Err(AuthError::UserNotFound { .. }));
    }
}
