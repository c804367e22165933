//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server exposing
//! sign-up, sign-in and token-check endpoints over a pluggable credential
//! store.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Auth flow, password verifier, token issuer, credential stores, handlers
//! - **`middleware`** - Request validation and bearer token authentication
//! - **`error`** - `AuthError` and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Configuration, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Request Validator -> Auth Flow -> Password Verifier / Token Issuer <-> Credential Store
//!
//! Every failure is an `AuthError`, rendered by its `IntoResponse`
//! implementation as `{message, success: false, data: {}, err}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use auth::AuthService;
pub use error::AuthError;
pub use server::{create_app, AppState, ServerConfig};
