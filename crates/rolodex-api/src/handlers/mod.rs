//! HTTP request handlers.

pub mod auth;
pub mod contact;
pub mod health;
