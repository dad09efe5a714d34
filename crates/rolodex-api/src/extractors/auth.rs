//! `AuthUser` extractor — pulls the token from the `x-auth-token` header, verifies, and injects context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use rolodex_core::error::AppError;
use rolodex_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the signed bearer token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated("No token, authorization denied"))?;

        // Verify signature and expiry; rejection detail stays in the logs.
        let claims = state.token_verifier.verify(token).map_err(|err| {
            tracing::debug!(error = %err, "Token verification failed");
            AppError::from(err)
        })?;

        // The token may outlive the account it was issued for.
        let user = state
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthenticated("Token is not valid"))?;

        Ok(AuthUser(RequestContext::new(user.id, user.name)))
    }
}
