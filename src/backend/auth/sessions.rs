/**
 * Token Issuance and Verification
 *
 * This module signs and verifies HS256 JSON Web Tokens carrying a user's
 * identity. The signing key is derived once from the configured secret when
 * the issuer is built and is never logged.
 *
 * A token is valid strictly before its `exp`; there is no leeway. All
 * verification failures (bad signature, malformed token, expiry) surface as
 * the same `AuthError::InvalidToken`.
 */

use std::fmt;
use std::time::Duration;

use jsonwebtoken::{
    decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::AuthError;

/// Default token lifetime: one day
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Identity embedded in a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID
    pub id: Uuid,
    /// Email
    pub email: String,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: Uuid,
    /// Email
    pub email: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// The identity part of the claims
    pub fn identity(&self) -> TokenClaims {
        TokenClaims {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// Signs and verifies identity tokens under one secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Build an issuer from the process-wide secret
    pub fn new(secret: &SecretString, ttl: Duration) -> Self {
        let key = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `verify_at`
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(key),
            decoding: DecodingKey::from_secret(key),
            validation,
            ttl,
        }
    }

    /// Token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for a user, expiring `ttl` from now
    pub fn issue(&self, claims: &TokenClaims) -> Result<String, AuthError> {
        self.issue_at(claims, get_current_timestamp())
    }

    /// Create a token as if issued at `now` (Unix seconds)
    pub fn issue_at(&self, claims: &TokenClaims, now: u64) -> Result<String, AuthError> {
        let claims = Claims {
            id: claims.id,
            email: claims.email.clone(),
            iat: now,
            exp: now.saturating_add(self.ttl.as_secs()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            AuthError::TokenIssue(e)
        })
    }

    /// Verify and decode a token against the current time
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, get_current_timestamp())
    }

    /// Verify and decode a token as if checked at `now` (Unix seconds)
    pub fn verify_at(&self, token: &str, now: u64) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| {
                tracing::debug!("Token rejected: {:?}", e.kind());
                AuthError::InvalidToken
            })?
            .claims;

        if now >= claims.exp {
            tracing::debug!("Token rejected: expired at {}", claims.exp);
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }
}
