//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//! Middleware functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer token authentication for protected routes
//! - **`validate`** - Required-field checks for credential requests
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::auth::signin;
//! use authgate::backend::middleware::validate_user_auth;
//! use authgate::backend::server::state::AppState;
//! use axum::{middleware::from_fn, routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/v1/signin", post(signin))
//!     .route_layer(from_fn(validate_user_auth));
//! ```

pub mod auth;
pub mod validate;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
pub use validate::{missing_fields, validate_user_auth, Credentials};
