//! API data transfer objects.

pub mod request;
pub mod response;

pub use request::{CreateContactRequest, LoginRequest, RegisterRequest, UpdateContactRequest};
pub use response::{HealthResponse, MessageResponse, TokenResponse, UserResponse};
