//! Registration, login, and current-user resolution.

use std::sync::Arc;

use tracing::info;

use rolodex_auth::jwt::TokenIssuer;
use rolodex_auth::password::{PasswordHasher, PasswordValidator};
use rolodex_core::error::AppError;
use rolodex_database::repositories::UserRepository;
use rolodex_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// Handles credential verification and token issuance.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository (the credential store).
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// Token issuer.
    issuer: Arc<TokenIssuer>,
    /// Hash verified against when the email is unknown, so login cost does
    /// not reveal whether an email is registered.
    dummy_hash: String,
}

impl AuthService {
    /// Creates a new auth service.
    ///
    /// Hashes a throwaway password once up front; the result is used to
    /// equalize the work done on the unknown-email login path.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        issuer: Arc<TokenIssuer>,
    ) -> Result<Self, AppError> {
        let dummy_hash = hasher.hash_password("timing-equalization-placeholder")?;

        Ok(Self {
            user_repo,
            hasher,
            validator,
            issuer,
            dummy_hash,
        })
    }

    /// Registers a new user and returns a freshly issued token.
    ///
    /// The plaintext password exists only for the duration of this call;
    /// only the Argon2id hash is persisted. A duplicate email fails with
    /// `Conflict` — the database's unique constraint decides concurrent
    /// races, so exactly one of two simultaneous registrations wins.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AppError> {
        self.validator.validate(password)?;

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        self.issuer.issue(user.id)
    }

    /// Verifies credentials and returns a token.
    ///
    /// An unknown email and a wrong password produce the same error, so a
    /// caller cannot probe which emails are registered. The unknown-email
    /// branch still runs a full Argon2 verification against a dummy hash,
    /// keeping the response time close to the wrong-password branch.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            let _ = self.hasher.verify_password(password, &self.dummy_hash);
            return Err(AppError::unauthenticated("Invalid credentials"));
        };

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthenticated("Invalid credentials"));
        }

        info!(user_id = %user.id, "User logged in");

        self.issuer.issue(user.id)
    }

    /// Returns the calling user's identity record.
    pub async fn current_user(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
