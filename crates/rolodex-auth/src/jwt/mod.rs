//! Stateless JWT issuance and verification.

pub mod claims;
pub mod error;
pub mod issuer;
pub mod keys;
pub mod verifier;

pub use claims::Claims;
pub use error::TokenError;
pub use issuer::TokenIssuer;
pub use keys::{KeyProvider, StaticKeys};
pub use verifier::TokenVerifier;
