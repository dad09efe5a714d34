//! # rolodex-api
//!
//! HTTP API layer for Rolodex built on Axum.
//!
//! Provides the REST endpoints, the token-gatekeeper extractor, DTOs with
//! validation, CORS/trace middleware, and the `AppError` → HTTP mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
