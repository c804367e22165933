/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/v1/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * The route sits behind `auth_middleware`, which verifies the bearer token
 * and attaches the `AuthenticatedUser` this handler reads.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::backend::middleware::auth::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the request did not pass `auth_middleware`
///   or the user disappeared in between
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "email": "user@example.com"
/// }
/// ```
pub async fn get_me(
    State(auth): State<AuthService>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, AuthError> {
    let user = auth.user(user.user_id).await?;

    Ok(Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::test_support::test_auth_service;
    use crate::backend::middleware::auth::AuthenticatedUser;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_get_me_success() {
        let auth = test_auth_service();
        let user = auth.sign_up("test@example.com", "password123").await.unwrap();

        let response = get_me(
            State(auth),
            AuthUser(AuthenticatedUser {
                user_id: user.id,
                email: user.email.clone(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.email, "test@example.com");
        assert_eq!(response.id, user.id);
    }

    #[tokio::test]
    async fn test_get_me_unknown_user() {
        let auth = test_auth_service();

        let result = get_me(
            State(auth),
            AuthUser(AuthenticatedUser {
                user_id: uuid::Uuid::new_v4(),
                email: "ghost@example.com".to_string(),
            }),
        )
        .await;
        assert_matches!(result, Err(AuthError::UserNotFound { .. }));
    }
}
