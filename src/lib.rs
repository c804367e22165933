//! authgate - Authentication Service Library
//!
//! authgate is a small authentication backend built on Axum: credential
//! checks against bcrypt hashes, HS256 JSON Web Token issuance and
//! verification, request validation middleware, and a closed error taxonomy
//! rendered as uniform JSON bodies.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no server dependencies
//!   - Field-level validation failures and their wrapping errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Auth flow (sign-up, sign-in, token authentication)
//!   - Password verifier and token issuer
//!   - Credential store trait with PostgreSQL and in-memory adapters
//!   - Axum routes, middleware and error rendering
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error` - `ValidationFailure`, `SharedError`
//! - `backend::error` - `AuthError`, `ValidationError` and their HTTP rendering

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
