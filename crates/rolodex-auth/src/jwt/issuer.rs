//! Token creation with configurable signing and TTL.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{Header, encode};
use uuid::Uuid;

use rolodex_core::config::auth::AuthConfig;
use rolodex_core::error::AppError;

use super::claims::Claims;
use super::keys::KeyProvider;

/// Creates signed bearer tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    /// Source of the signing key.
    keys: Arc<dyn KeyProvider>,
    /// Token TTL in seconds.
    ttl_seconds: i64,
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration and a key provider.
    pub fn new(config: &AuthConfig, keys: Arc<dyn KeyProvider>) -> Self {
        Self {
            keys,
            ttl_seconds: config.jwt_ttl_seconds as i64,
        }
    }

    /// Issues a token for the given user with the configured TTL.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AppError> {
        self.issue_with_ttl(user_id, self.ttl_seconds)
    }

    /// Issues a token with an explicit TTL in seconds.
    pub fn issue_with_ttl(&self, user_id: Uuid, ttl_seconds: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: now.timestamp() + ttl_seconds,
        };

        encode(&Header::default(), &claims, self.keys.encoding_key())
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}
