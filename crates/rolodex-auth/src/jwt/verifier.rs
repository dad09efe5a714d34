//! Token validation.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, Validation, decode};

use rolodex_core::config::auth::AuthConfig;

use super::claims::Claims;
use super::error::TokenError;
use super::keys::KeyProvider;

/// Verifies presented bearer tokens.
#[derive(Clone)]
pub struct TokenVerifier {
    /// Source of the verification key.
    keys: Arc<dyn KeyProvider>,
    /// Validation configuration.
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration and a key provider.
    ///
    /// Leeway comes from `auth.jwt_leeway_seconds` and defaults to zero, so
    /// a token is rejected the moment its expiry passes.
    pub fn new(config: &AuthConfig, keys: Arc<dyn KeyProvider>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.jwt_leeway_seconds;

        Self { keys, validation }
    }

    /// Decodes and validates a token, returning its claims.
    ///
    /// Checks run cheapest-first: structure, then signature, then expiry.
    /// An expired token with a valid signature fails with
    /// [`TokenError::Expired`], never [`TokenError::InvalidSignature`].
    /// A token is valid strictly before its `exp` timestamp (plus leeway),
    /// so a zero-TTL token is already expired at issuance.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, self.keys.decoding_key(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        // The library's expiry check is strict (`exp < now - leeway`), which
        // would accept a token in the very second it expires.
        if chrono::Utc::now().timestamp() >= claims.exp + self.validation.leeway as i64 {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}
