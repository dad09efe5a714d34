//! # rolodex-entity
//!
//! Domain entity models for Rolodex. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod contact;
pub mod user;
