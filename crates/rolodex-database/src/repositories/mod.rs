//! Repository implementations, one per aggregate.

pub mod contact;
pub mod user;

pub use contact::ContactRepository;
pub use user::UserRepository;
