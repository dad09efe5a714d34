//! Contact entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::ContactKind;

/// A contact owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contact {
    /// Unique contact identifier.
    pub id: Uuid,
    /// The owning user. Set at creation from the authenticated identity,
    /// never reassigned.
    pub owner_id: Uuid,
    /// Contact name.
    pub name: String,
    /// Contact email (optional).
    pub email: Option<String>,
    /// Contact phone number (optional).
    pub phone: Option<String>,
    /// Personal or professional.
    pub kind: ContactKind,
    /// When the contact was created.
    pub created_at: DateTime<Utc>,
    /// When the contact was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new contact. The owner is supplied separately
/// by the service layer from the request context, never by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContact {
    /// Contact name.
    pub name: String,
    /// Contact email (optional).
    pub email: Option<String>,
    /// Contact phone number (optional).
    pub phone: Option<String>,
    /// Personal or professional (defaults to personal).
    #[serde(default)]
    pub kind: ContactKind,
}

/// Partial update of a contact's fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContact {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New kind.
    pub kind: Option<ContactKind>,
}
