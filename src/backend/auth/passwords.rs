/**
 * Password Hashing and Verification
 *
 * Thin wrapper over bcrypt. Hashing uses the configured cost; verification
 * reads the cost stored in the hash. Both are CPU-bound, so the async
 * variants run on tokio's blocking pool.
 */

use bcrypt::{hash, verify};

use crate::backend::error::AuthError;

/// bcrypt password verifier
#[derive(Debug, Clone, Copy)]
pub struct PasswordVerifier {
    cost: u32,
}

impl Default for PasswordVerifier {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordVerifier {
    /// Create a verifier hashing with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Cost used for new hashes
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        hash(plaintext, self.cost).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            AuthError::internal("password hashing failed")
        })
    }

    /// Compare a plaintext password against a stored hash
    ///
    /// # Errors
    ///
    /// `AuthError::Verification` if the stored hash is malformed.
    pub fn verify(&self, plaintext: &str, password_hash: &str) -> Result<bool, AuthError> {
        verify(plaintext, password_hash).map_err(|e| {
            tracing::error!("Password could not be verified: {:?}", e);
            AuthError::Verification(e)
        })
    }

    /// `hash` on the blocking pool
    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, AuthError> {
        let verifier = *self;
        tokio::task::spawn_blocking(move || verifier.hash(&plaintext))
            .await
            .map_err(|e| AuthError::internal(format!("password hashing task failed: {}", e)))?
    }

    /// `verify` on the blocking pool
    pub async fn verify_blocking(
        &self,
        plaintext: String,
        password_hash: String,
    ) -> Result<bool, AuthError> {
        let verifier = *self;
        tokio::task::spawn_blocking(move || verifier.verify(&plaintext, &password_hash))
            .await
            .map_err(|e| AuthError::internal(format!("password verification task failed: {}", e)))?
    }
}
