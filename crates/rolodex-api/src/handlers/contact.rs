//! Contact handlers — list, create, get, update, delete.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use rolodex_entity::contact::{Contact, CreateContact, UpdateContact};

use crate::dto::request::{CreateContactRequest, UpdateContactRequest};
use crate::dto::response::MessageResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.contact_service.list_contacts(auth.context()).await?;
    Ok(Json(contacts))
}

/// POST /api/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    req.validate().map_err(|e| validation_error(&e))?;

    let contact = state
        .contact_service
        .create_contact(
            auth.context(),
            CreateContact {
                name: req.name,
                email: req.email,
                phone: req.phone,
                kind: req.kind,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/contacts/{id}
pub async fn get_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Contact>, ApiError> {
    let contact = state.contact_service.get_contact(auth.context(), id).await?;
    Ok(Json(contact))
}

/// PUT /api/contacts/{id}
pub async fn update_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateContactRequest>,
) -> Result<Json<Contact>, ApiError> {
    let contact = state
        .contact_service
        .update_contact(
            auth.context(),
            id,
            UpdateContact {
                name: req.name,
                email: req.email,
                phone: req.phone,
                kind: req.kind,
            },
        )
        .await?;

    Ok(Json(contact))
}

/// DELETE /api/contacts/{id}
pub async fn delete_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .contact_service
        .delete_contact(auth.context(), id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Contact removed".to_string(),
    }))
}
