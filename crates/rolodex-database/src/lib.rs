//! # rolodex-database
//!
//! PostgreSQL access layer for Rolodex: connection pool management,
//! embedded migrations, and one repository per aggregate. All consistency
//! guarantees (email uniqueness, atomic creates) are delegated to the
//! database's constraints and transactions.

pub mod connection;
pub mod migration;
pub mod repositories;
