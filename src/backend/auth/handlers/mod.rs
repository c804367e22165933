//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/v1/signup - User registration
//! - **`signin`** - POST /api/v1/signin - Credential check, returns a token
//! - **`is_authenticated`** - GET /api/v1/isAuthenticated - Token check
//! - **`get_me`** - GET /api/v1/me - Current user info (behind `auth_middleware`)
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::auth::handlers::{signin, signup};
//! use authgate::backend::server::state::AppState;
//! use axum::{routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/v1/signup", post(signup))
//!     .route("/api/v1/signin", post(signin));
//! ```

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// Token check handler
pub mod authenticated;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, AuthenticatedResponse, CredentialsRequest, UserResponse};

// Re-export handlers
pub use authenticated::is_authenticated;
pub use me::get_me;
pub use signin::signin;
pub use signup::signup;
