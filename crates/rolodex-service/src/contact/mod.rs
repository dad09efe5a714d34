//! Owner-scoped contact CRUD.

pub mod service;

pub use service::ContactService;
