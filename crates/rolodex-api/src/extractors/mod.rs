//! Request extractors.

pub mod auth;

pub use auth::{AUTH_TOKEN_HEADER, AuthUser};
