//! Ownership enforcement — the single authorization rule of the system.

use uuid::Uuid;

use rolodex_core::error::AppError;

/// The action a caller wants to perform on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceAction {
    /// Read a single resource.
    Read,
    /// Modify a resource.
    Update,
    /// Remove a resource.
    Delete,
}

impl ResourceAction {
    /// Return the action as a lowercase string for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Enforces owner-exclusive access to resources.
///
/// There is no shared or group access tier: every action on a resource is
/// allowed iff the authenticated user is its owner. Callers must look the
/// resource up first — a missing resource is `NotFound` and never reaches
/// this guard, so 404 (absent) and 403 (present but not yours) stay
/// distinguishable, matching the API's documented behavior.
#[derive(Debug, Clone, Default)]
pub struct OwnershipGuard;

impl OwnershipGuard {
    /// Creates a new ownership guard.
    pub fn new() -> Self {
        Self
    }

    /// Checks whether `user_id` may perform `action` on a resource owned by
    /// `owner_id`.
    ///
    /// Returns `Ok(())` if allowed, or `Err(AppError::Forbidden)` if denied.
    pub fn authorize(
        &self,
        user_id: Uuid,
        owner_id: Uuid,
        action: ResourceAction,
    ) -> Result<(), AppError> {
        if user_id == owner_id {
            return Ok(());
        }

        tracing::debug!(
            user_id = %user_id,
            owner_id = %owner_id,
            action = action.as_str(),
            "Ownership check denied"
        );
        Err(AppError::forbidden("Not authorized"))
    }
}
