/**
 * API Route Handlers
 *
 * This module defines the authentication API routes.
 *
 * # Routes
 *
 * - `POST /api/v1/signup` - User registration
 * - `POST /api/v1/signin` - Credential check, returns a token
 * - `GET /api/v1/isAuthenticated` - Token check, returns the user id
 * - `GET /api/v1/me` - Current user info
 */

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, is_authenticated, signin, signup};
use crate::backend::middleware::{auth_middleware, validate_user_auth};
use crate::backend::server::state::AppState;

/// Prefix shared by every API route
pub const API_PREFIX: &str = "/api/v1";

/// Configure API routes
///
/// # Middleware
///
/// - `signup` and `signin` run behind `validate_user_auth`, which rejects
///   bodies without an email or password
/// - `me` runs behind `auth_middleware`, which requires a valid bearer token
/// - `isAuthenticated` reads the bearer token itself
pub fn configure_api_routes(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router
        .route(
            &format!("{API_PREFIX}/signup"),
            post(signup).route_layer(from_fn(validate_user_auth)),
        )
        .route(
            &format!("{API_PREFIX}/signin"),
            post(signin).route_layer(from_fn(validate_user_auth)),
        )
        .route(
            &format!("{API_PREFIX}/isAuthenticated"),
            get(is_authenticated),
        )
        .route(
            &format!("{API_PREFIX}/me"),
            get(get_me).route_layer(from_fn_with_state(state, auth_middleware)),
        )
}
