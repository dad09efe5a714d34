//! Contact domain entities.

pub mod kind;
pub mod model;

pub use kind::ContactKind;
pub use model::{Contact, CreateContact, UpdateContact};
