//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use rolodex_auth::jwt::{TokenIssuer, TokenVerifier};
use rolodex_auth::ownership::OwnershipGuard;
use rolodex_auth::password::{PasswordHasher, PasswordValidator};
use rolodex_core::config::AppConfig;
use rolodex_database::repositories::{ContactRepository, UserRepository};
use rolodex_service::auth::AuthService;
use rolodex_service::contact::ContactService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; everything here is
/// read-only after startup, so no cross-request mutable state exists
/// outside the database.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Token issuer
    pub token_issuer: Arc<TokenIssuer>,
    /// Token verifier
    pub token_verifier: Arc<TokenVerifier>,
    /// Password hasher (Argon2id)
    pub password_hasher: Arc<PasswordHasher>,
    /// Ownership guard
    pub ownership_guard: Arc<OwnershipGuard>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Contact repository
    pub contact_repo: Arc<ContactRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Registration/login service
    pub auth_service: Arc<AuthService>,
    /// Contact service
    pub contact_service: Arc<ContactService>,
}

impl AppState {
    /// Wires the full dependency graph from configuration and a pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Result<Self, rolodex_core::AppError> {
        let keys = Arc::new(rolodex_auth::jwt::StaticKeys::new(&config.auth));
        let token_issuer = Arc::new(TokenIssuer::new(&config.auth, keys.clone()));
        let token_verifier = Arc::new(TokenVerifier::new(&config.auth, keys));
        let password_hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let ownership_guard = Arc::new(OwnershipGuard::new());

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let contact_repo = Arc::new(ContactRepository::new(db_pool.clone()));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            password_validator,
            Arc::clone(&token_issuer),
        )?);
        let contact_service = Arc::new(ContactService::new(
            Arc::clone(&contact_repo),
            Arc::clone(&ownership_guard),
        ));

        Ok(Self {
            config: Arc::new(config),
            db_pool,
            token_issuer,
            token_verifier,
            password_hasher,
            ownership_guard,
            user_repo,
            contact_repo,
            auth_service,
            contact_service,
        })
    }
}
