//! Contact kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a contact is a personal or a professional one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contact_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// A personal contact (the default).
    Personal,
    /// A professional contact.
    Professional,
}

impl ContactKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Professional => "professional",
        }
    }
}

impl Default for ContactKind {
    fn default() -> Self {
        Self::Personal
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactKind {
    type Err = rolodex_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "professional" => Ok(Self::Professional),
            _ => Err(rolodex_core::AppError::validation(format!(
                "Invalid contact kind: '{s}'. Expected one of: personal, professional"
            ))),
        }
    }
}
