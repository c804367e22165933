/**
 * Authentication Flow
 *
 * `AuthService` composes the credential store, the password verifier and the
 * token issuer. It is cheap to clone and holds no per-request state.
 *
 * # Flows
 *
 * 1. **Sign up**: validate credential -> hash password -> create user
 * 2. **Sign in**: look up by email -> verify password -> issue token
 * 3. **Authenticate**: verify token -> resolve user by id -> return id
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::passwords::PasswordVerifier;
use crate::backend::auth::sessions::{TokenClaims, TokenIssuer};
use crate::backend::auth::users::{CredentialStore, NewUser, User};
use crate::backend::error::AuthError;
use crate::shared::{FieldViolation, ValidationFailure};

/// Accepted password length, in characters
const PASSWORD_LENGTH: std::ops::RangeInclusive<usize> = 3..=100;

/// Check a sign-up credential against the user schema
///
/// Returns every violated rule, in field order.
pub fn validate_new_credential(email: &str, password: &str) -> Result<(), ValidationFailure> {
    let mut violations = Vec::new();

    if !email.contains('@') {
        violations.push(FieldViolation::new("email", "email must contain '@'"));
    }

    if !PASSWORD_LENGTH.contains(&password.chars().count()) {
        violations.push(FieldViolation::new(
            "password",
            format!(
                "password must be {} to {} characters",
                PASSWORD_LENGTH.start(),
                PASSWORD_LENGTH.end()
            ),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure::new("SchemaValidationError", violations))
    }
}

/// Plaintext behind the hash checked when a sign-in names no user
const UNKNOWN_USER_PASSWORD: &str = "unknown-user-placeholder";

/// Authentication flow over an injected credential store
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    passwords: PasswordVerifier,
    tokens: Arc<TokenIssuer>,
    /// Hash at the configured cost, verified for unknown emails
    unknown_user_hash: Arc<str>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("passwords", &self.passwords)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Create a new auth service
    pub fn new(
        store: Arc<dyn CredentialStore>,
        passwords: PasswordVerifier,
        tokens: TokenIssuer,
    ) -> Self {
        let unknown_user_hash = passwords.hash(UNKNOWN_USER_PASSWORD).unwrap_or_else(|e| {
            tracing::error!("Failed to prepare unknown-user hash: {}", e);
            String::new()
        });

        Self {
            store,
            passwords,
            tokens: Arc::new(tokens),
            unknown_user_hash: unknown_user_hash.into(),
        }
    }

    /// The token issuer used by this service
    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// * `Validation` - credential breaks a schema rule or the email is taken
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<User, AuthError> {
        validate_new_credential(email, password).map_err(|failure| {
            tracing::warn!("Sign-up rejected for {}: {}", email, failure);
            AuthError::from(failure)
        })?;

        let password_hash = self.passwords.hash_blocking(password.to_owned()).await?;

        let user = self
            .store
            .create(NewUser {
                email: email.to_owned(),
                password_hash,
            })
            .await?;

        tracing::info!("User created successfully: {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Verify a credential and issue a token
    ///
    /// # Errors
    ///
    /// * `UserNotFound` - no user with this email; still costs one bcrypt
    ///   verification, so response time does not reveal whether the account exists
    /// * `IncorrectPassword` - password mismatch
    /// * `Verification` - the stored hash is malformed
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let Some(user) = self.store.get_by_email(email).await? else {
            tracing::warn!("User not found: {}", email);
            // Same bcrypt work as a real mismatch; the outcome is discarded.
            let _ = self
                .passwords
                .verify_blocking(password.to_owned(), self.unknown_user_hash.to_string())
                .await;
            return Err(AuthError::user_not_found(email));
        };

        let matches = self
            .passwords
            .verify_blocking(password.to_owned(), user.password_hash.clone())
            .await?;

        if !matches {
            tracing::warn!("Invalid password for user: {}", user.id);
            return Err(AuthError::IncorrectPassword);
        }

        let token = self.tokens.issue(&TokenClaims {
            id: user.id,
            email: user.email.clone(),
        })?;

        tracing::info!("User signed in successfully: {} ({})", user.id, user.email);
        Ok(token)
    }

    /// Verify a token and resolve the user it names
    ///
    /// # Errors
    ///
    /// * `InvalidToken` - signature, shape or expiry check failed
    /// * `UserNotFound` - the user was deleted after the token was issued
    pub async fn is_authenticated(&self, token: &str) -> Result<Uuid, AuthError> {
        Ok(self.authenticate(token).await?.id)
    }

    /// Verify a token and return the full user record it names
    pub async fn authenticate(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.tokens.verify(token)?;

        self.store.get_by_id(claims.id).await?.ok_or_else(|| {
            tracing::warn!("No user found for token subject {}", claims.id);
            AuthError::user_not_found(claims.id.to_string())
        })
    }

    /// Fetch a user by ID
    pub async fn user(&self, id: Uuid) -> Result<User, AuthError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AuthError::user_not_found(id.to_string()))
    }
}
