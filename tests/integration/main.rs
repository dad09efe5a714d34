//! Integration test entry point.
//!
//! These tests exercise the full HTTP stack against a real PostgreSQL
//! instance and are gated behind the `postgres_tests` feature:
//!
//! ```sh
//! DATABASE_URL=postgres://... cargo test --features postgres_tests
//! ```
#![cfg(feature = "postgres_tests")]

mod helpers;

mod auth_test;
mod contact_test;
