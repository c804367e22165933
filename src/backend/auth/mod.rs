//! Authentication Module
//!
//! This module handles user registration, sign-in and token authentication.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and credential store adapters
//! ├── passwords.rs    - bcrypt hashing and verification
//! ├── sessions.rs     - JWT issuance and verification
//! ├── service.rs      - Auth flow over the above
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── signin.rs   - Sign-in handler
//!     ├── authenticated.rs - Token check handler
//!     └── me.rs       - Current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Sign up**: email and password -> validated -> hashed -> user created
//! 2. **Sign in**: email and password -> credentials verified -> JWT returned
//! 3. **Authenticate**: JWT -> verified -> user resolved -> user id returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs, valid for one day by default, with no leeway
//! - Unknown email and wrong password return the same 401 body
//! - A token naming a deleted user is rejected

/// User data model and credential stores
pub mod users;

/// Password hashing and verification
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Authentication flow
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, AuthenticatedResponse, CredentialsRequest, UserResponse};
pub use handlers::{get_me, is_authenticated, signin, signup};
pub use service::AuthService;
