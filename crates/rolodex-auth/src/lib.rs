//! # rolodex-auth
//!
//! Authentication and authorization primitives for Rolodex.
//!
//! ## Modules
//!
//! - `jwt` — stateless token issuance and verification
//! - `password` — Argon2id password hashing and length policy
//! - `ownership` — owner-exclusive access enforcement for resources

pub mod jwt;
pub mod ownership;
pub mod password;

pub use jwt::{Claims, TokenError, TokenIssuer, TokenVerifier};
pub use ownership::{OwnershipGuard, ResourceAction};
pub use password::{PasswordHasher, PasswordValidator};
