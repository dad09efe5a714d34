//! Request context carrying the authenticated user.

use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Produced by the API layer's auth extractor after the token is verified
/// and the subject resolved against the credential store, then passed
/// explicitly into service methods so that every operation knows *who* is
/// acting. Scoped strictly to one request; never cached across requests.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's display name, carried for log fields.
    pub name: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, name: String) -> Self {
        Self { user_id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carries_the_resolved_identity() {
        let id = Uuid::new_v4();
        let ctx = RequestContext::new(id, "Alice".to_string());

        assert_eq!(ctx.user_id, id);
        assert_eq!(ctx.name, "Alice");
    }
}
