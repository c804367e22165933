/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits used for Axum state extraction.
 *
 * # State Extraction
 *
 * Handlers take `State<AuthService>` rather than the whole `AppState`;
 * the `FromRef` implementation below hands out a clone of the service.
 *
 * # Example
 *
 * ```rust,no_run
 * use authgate::backend::auth::AuthService;
 * use axum::extract::State;
 *
 * async fn handler(State(auth): State<AuthService>) {
 *     let _ = auth.is_authenticated("token").await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::passwords::PasswordVerifier;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::CredentialStore;
use crate::backend::server::config::ServerConfig;

/// Application state shared by every request handler
///
/// Cloning is cheap: the credential store and token issuer sit behind `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Authentication flow over the configured credential store
    pub auth: AuthService,
}

impl AppState {
    /// Wire the auth flow from configuration and a credential store
    pub fn new(config: &ServerConfig, store: Arc<dyn CredentialStore>) -> Self {
        let passwords = PasswordVerifier::new(config.bcrypt_cost);
        let tokens = TokenIssuer::new(&config.jwt_secret, config.token_ttl);

        Self {
            auth: AuthService::new(store, passwords, tokens),
        }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
