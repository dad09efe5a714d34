//! Typed token verification errors.

use thiserror::Error;

use rolodex_core::error::AppError;

/// Why a presented token failed verification.
///
/// The variants are ordered by how the checks run: structure first (the
/// cheapest), then signature, then expiry. Callers at the API boundary
/// collapse these into a single `Unauthenticated` failure and may expose
/// only the expired/invalid distinction; the precise variant is for
/// server-side logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token is not structurally a JWT (bad segments, base64, or JSON).
    #[error("token is malformed")]
    Malformed,
    /// The signature does not match — the token was tampered with or signed
    /// with a different key.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The signature is valid but the expiry has passed.
    #[error("token has expired")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AppError::unauthenticated("Token has expired"),
            TokenError::Malformed | TokenError::InvalidSignature => {
                AppError::unauthenticated("Token is not valid")
            }
        }
    }
}
