//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use rolodex_entity::contact::ContactKind;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Please add name"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create contact request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactRequest {
    /// Contact name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Personal or professional (defaults to personal).
    #[serde(default)]
    pub kind: ContactKind,
}

/// Update contact request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New kind.
    pub kind: Option<ContactKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_field_constraints() {
        let ok = RegisterRequest {
            name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = RegisterRequest {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_create_contact_defaults_to_personal() {
        let req: CreateContactRequest = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert_eq!(req.kind, ContactKind::Personal);
        assert!(req.validate().is_ok());
    }
}
