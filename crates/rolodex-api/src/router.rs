//! Route definitions for the Rolodex HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(auth_routes())
        .merge(contact_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Registration endpoint: POST a user, get a token back.
fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(handlers::auth::register))
}

/// Auth endpoints: login and current-user lookup.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth", post(handlers::auth::login))
        .route("/auth", get(handlers::auth::me))
}

/// Contact CRUD, all owner-scoped.
fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(handlers::contact::list_contacts))
        .route("/contacts", post(handlers::contact::create_contact))
        .route("/contacts/{id}", get(handlers::contact::get_contact))
        .route("/contacts/{id}", put(handlers::contact::update_contact))
        .route("/contacts/{id}", delete(handlers::contact::delete_contact))
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}