//! Signing key material for the token service.

use jsonwebtoken::{DecodingKey, EncodingKey};

use rolodex_core::config::auth::AuthConfig;

/// Source of the keys used to sign and verify tokens.
///
/// The issuer and verifier resolve their keys through this trait rather
/// than holding raw secrets, so a key-versioning or lookup scheme can be
/// introduced later without changing either interface. The only
/// implementation today is [`StaticKeys`]: one process-wide HS256 secret,
/// loaded at startup and never rotated mid-process.
pub trait KeyProvider: Send + Sync {
    /// Key used to sign newly issued tokens.
    fn encoding_key(&self) -> &EncodingKey;
    /// Key used to verify presented tokens.
    fn decoding_key(&self) -> &DecodingKey;
}

/// A single fixed HMAC secret shared by issuance and verification.
pub struct StaticKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl StaticKeys {
    /// Derive both keys from the configured signing secret.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.jwt_secret.as_bytes())
    }

    /// Derive both keys from raw secret bytes.
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }
}

impl KeyProvider for StaticKeys {
    fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl std::fmt::Debug for StaticKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of Debug output.
        f.debug_struct("StaticKeys").finish()
    }
}
