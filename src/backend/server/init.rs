/**
 * Server Initialization
 *
 * This module builds the Axum application from a `ServerConfig`:
 * it picks the credential store, assembles `AppState` and configures
 * the router.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::users::{CredentialStore, MemoryCredentialStore, PgCredentialStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. **Load Database**: connects to `database_url` and runs migrations
/// 2. **Pick Store**: PostgreSQL if a URL is configured, in-memory otherwise
/// 3. **Create State**: wires the auth flow from configuration
/// 4. **Create Router**: configures all routes and layers
///
/// # Errors
///
/// Fails if `database_url` is set but the database cannot be reached.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing authentication server");

    let pool = load_database(config.database_url.as_deref()).await?;

    let store: Arc<dyn CredentialStore> = match pool {
        Some(pool) => {
            tracing::info!("Using PostgreSQL credential store");
            Arc::new(PgCredentialStore::new(pool))
        }
        None => {
            tracing::info!("Using in-memory credential store");
            Arc::new(MemoryCredentialStore::new())
        }
    };

    let app_state = AppState::new(config, store);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
