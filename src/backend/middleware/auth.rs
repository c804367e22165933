/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts the bearer token from the Authorization
 * header, runs it through `AuthService::authenticate` and provides the
 * user to handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// A missing or malformed header is reported as `InvalidToken`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AuthError::InvalidToken
        })?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            AuthError::InvalidToken
        })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts JWT token from Authorization header
/// 2. Verifies the token and that its user still exists
/// 3. Attaches user data to request extensions for use in handlers
///
/// Returns 401 if the token is missing, invalid, or names a deleted user.
pub async fn auth_middleware(
    State(auth): State<AuthService>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(request.headers())?;

    let user = auth.authenticate(token).await?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Reads the `AuthenticatedUser` attached by `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::InvalidToken
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers_with("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_missing() {
        assert_matches!(bearer_token(&HeaderMap::new()), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        assert_matches!(bearer_token(&headers_with("Basic abc")), Err(AuthError::InvalidToken));
        assert_matches!(bearer_token(&headers_with("Bearer ")), Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn test_auth_user_extractor() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap()
            .into_parts();

        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
        };
        parts.extensions.insert(user.clone());

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted.user_id, user.user_id);
    }

    #[tokio::test]
    async fn test_auth_user_extractor_missing() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap()
            .into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert_matches!(result, Err(AuthError::InvalidToken));
    }
}
