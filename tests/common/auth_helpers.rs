//! Authentication test helpers
//!
//! Provides utilities for starting a test server, creating test users and
//! building authorization headers.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum_test::TestServer;
use secrecy::SecretString;
use uuid::Uuid;

use authgate::backend::auth::users::MemoryCredentialStore;
use authgate::backend::routes::create_router;
use authgate::backend::server::{AppState, ServerConfig};

/// Secret used to sign tokens in tests
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test server plus direct access to its store and state
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryCredentialStore>,
    pub state: AppState,
}

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Configuration with a cheap bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(SecretString::from(TEST_SECRET.to_string()))
        .bcrypt_cost(4)
        .build()
        .expect("test configuration is valid")
}

/// Start a test server over an empty in-memory store
pub fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryCredentialStore::new());
    let state = AppState::new(&test_config(), store.clone());
    let server =
        TestServer::new(create_router(state.clone())).expect("Failed to start test server");

    TestApp {
        server,
        store,
        state,
    }
}

/// Create a test user and sign it in
pub async fn create_test_user(app: &TestApp, email: &str, password: &str) -> TestUser {
    let user = app
        .state
        .auth
        .sign_up(email, password)
        .await
        .expect("Failed to create test user");
    let token = app
        .state
        .auth
        .sign_in(email, password)
        .await
        .expect("Failed to sign in test user");

    TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(app: &TestApp) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(app, &email, "test_password_123").await
}

/// Create authorization header value
pub fn auth_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("token is a valid header value")
}
