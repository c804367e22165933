/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration:
 * the token signing key and lifetime, the bcrypt cost, the listening port
 * and the optional PostgreSQL database connection.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary first), with defaults for everything except `JWT_KEY`:
 *
 * | Variable          | Default  | Notes                              |
 * |-------------------|----------|------------------------------------|
 * | `JWT_KEY`         | required | HS256 signing secret               |
 * | `JWT_EXPIRY_SECS` | 86400    | token lifetime, must be positive   |
 * | `BCRYPT_COST`     | 12       | 4..=31                             |
 * | `DATABASE_URL`    | unset    | unset means an in-memory store     |
 * | `SERVER_PORT`     | 3000     |                                    |
 *
 * # Error Handling
 *
 * Invalid values are reported as `ConfigError` and stop startup. So does a
 * configured database that cannot be reached; only an unset `DATABASE_URL`
 * selects the in-memory store.
 */

use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL;

pub const JWT_KEY: &str = "JWT_KEY";
pub const JWT_EXPIRY_SECS: &str = "JWT_EXPIRY_SECS";
pub const BCRYPT_COST: &str = "BCRYPT_COST";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const SERVER_PORT: &str = "SERVER_PORT";

pub const DEFAULT_PORT: u16 = 3000;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("bcrypt cost {0} is outside 4..=31")]
    BcryptCostOutOfRange(u32),
}

/// Server configuration
#[derive(Debug)]
pub struct ServerConfig {
    /// Token signing secret, never logged
    pub jwt_secret: SecretString,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Listening port
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut builder = Self::builder();

        if let Some(secret) = get(JWT_KEY) {
            builder = builder.jwt_secret(SecretString::from(secret));
        }
        if let Some(raw) = get(JWT_EXPIRY_SECS) {
            builder = builder.token_ttl(Duration::from_secs(parse(JWT_EXPIRY_SECS, &raw)?));
        }
        if let Some(raw) = get(BCRYPT_COST) {
            builder = builder.bcrypt_cost(parse(BCRYPT_COST, &raw)?);
        }
        if let Some(url) = get(DATABASE_URL) {
            builder = builder.database_url(url);
        }
        if let Some(raw) = get(SERVER_PORT) {
            builder = builder.port(parse(SERVER_PORT, &raw)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ConfigError::MissingValue(JWT_KEY));
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: JWT_EXPIRY_SECS,
                value: "0".to_string(),
            });
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::BcryptCostOutOfRange(self.bcrypt_cost));
        }
        Ok(())
    }
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    jwt_secret: Option<SecretString>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    database_url: Option<String>,
    port: Option<u16>,
}

impl ServerConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: SecretString) -> Self {
        self.jwt_secret = Some(secret);
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: String) -> Self {
        self.database_url = Some(url);
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue(JWT_KEY))?,
            token_ttl: self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
            database_url: self.database_url,
            port: self.port.unwrap_or(DEFAULT_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Connect to PostgreSQL and run migrations
///
/// # Returns
///
/// - `Ok(Some(PgPool))` if the database is reachable
/// - `Ok(None)` if no URL is configured
///
/// # Errors
///
/// A configured database that cannot be reached is an error: the caller
/// must not fall back to the in-memory store. Migration failures are logged
/// and the pool is still returned.
pub async fn load_database(database_url: Option<&str>) -> Result<Option<PgPool>, sqlx::Error> {
    let Some(database_url) = database_url else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory credential store.");
        return Ok(None);
    };

    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(Some(pool))
}
