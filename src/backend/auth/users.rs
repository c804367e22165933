/**
 * User Model and Credential Store
 *
 * This module defines the user record and the `CredentialStore` port the
 * auth flow depends on, with two adapters:
 *
 * - `PgCredentialStore` - PostgreSQL via sqlx
 * - `MemoryCredentialStore` - process-local map, used when no database is
 *   configured and by tests
 *
 * Constraint violations on `create` come back as a `ValidationFailure`
 * carrying per-field messages.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::{FieldViolation, ValidationFailure};

/// User struct representing a stored user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    /// User email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
}

/// Credential store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record broke a data constraint
    #[error(transparent)]
    Validation(ValidationFailure),

    /// The backing database failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence port for user records
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch a user by email
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Fetch a user by ID
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Insert a new user
    ///
    /// Fails with `StoreError::Validation` if the email is already taken.
    async fn create(&self, data: NewUser) -> Result<User, StoreError>;
}

fn duplicate_email() -> ValidationFailure {
    ValidationFailure::new(
        "UniqueConstraintError",
        vec![FieldViolation::new("email", "email must be unique")],
    )
}

/// PostgreSQL-backed credential store
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    /// Wrap an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map sqlx constraint violations to validation failures
fn classify_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.kind() {
            sqlx::error::ErrorKind::UniqueViolation => {
                return StoreError::Validation(duplicate_email());
            }
            sqlx::error::ErrorKind::NotNullViolation | sqlx::error::ErrorKind::CheckViolation => {
                let field = db_err.constraint().unwrap_or("users").to_string();
                return StoreError::Validation(ValidationFailure::new(
                    "SchemaValidationError",
                    vec![FieldViolation::new(field, db_err.message().to_string())],
                ));
            }
            _ => {}
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, data: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(classify_insert_error)
    }
}

/// In-memory credential store
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete a user, returning it if it existed
    pub async fn remove(&self, id: Uuid) -> Option<User> {
        self.users.write().await.remove(&id)
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store holds no users
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create(&self, data: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|user| user.email == data.email) {
            return Err(StoreError::Validation(duplicate_email()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: data.email,
            password_hash: data.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());

        Ok(user)
    }
}
