//! # rolodex-service
//!
//! Business-logic services for Rolodex. Services receive an explicit
//! [`context::RequestContext`] identifying the caller and enforce ownership
//! through `rolodex-auth` before touching any resource.

pub mod auth;
pub mod contact;
pub mod context;

pub use context::RequestContext;
