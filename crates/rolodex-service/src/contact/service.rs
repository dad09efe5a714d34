//! Contact CRUD with ownership enforcement.
//!
//! Every id-addressed operation follows the same order: look the contact
//! up, short-circuit with `NotFound` if absent, then run the ownership
//! guard. A contact that exists but belongs to someone else is `Forbidden`,
//! so missing and non-owned contacts remain distinguishable to the caller.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use rolodex_auth::ownership::{OwnershipGuard, ResourceAction};
use rolodex_core::error::AppError;
use rolodex_database::repositories::ContactRepository;
use rolodex_entity::contact::{Contact, CreateContact, UpdateContact};

use crate::context::RequestContext;

/// Handles contact CRUD behind the ownership guard.
#[derive(Debug, Clone)]
pub struct ContactService {
    /// Contact repository.
    contact_repo: Arc<ContactRepository>,
    /// Ownership guard.
    guard: Arc<OwnershipGuard>,
}

impl ContactService {
    /// Creates a new contact service.
    pub fn new(contact_repo: Arc<ContactRepository>, guard: Arc<OwnershipGuard>) -> Self {
        Self {
            contact_repo,
            guard,
        }
    }

    /// Lists the caller's contacts, most recent first.
    pub async fn list_contacts(&self, ctx: &RequestContext) -> Result<Vec<Contact>, AppError> {
        self.contact_repo.find_by_owner(ctx.user_id).await
    }

    /// Creates a contact owned by the caller.
    ///
    /// The owner is stamped from the request context, never from client
    /// input, and is never reassigned afterwards.
    pub async fn create_contact(
        &self,
        ctx: &RequestContext,
        data: CreateContact,
    ) -> Result<Contact, AppError> {
        let contact = self.contact_repo.create(ctx.user_id, &data).await?;

        info!(
            contact_id = %contact.id,
            owner_id = %ctx.user_id,
            owner = %ctx.name,
            "Contact created"
        );

        Ok(contact)
    }

    /// Gets a single contact.
    pub async fn get_contact(
        &self,
        ctx: &RequestContext,
        contact_id: Uuid,
    ) -> Result<Contact, AppError> {
        let contact = self.find_authorized(ctx, contact_id, ResourceAction::Read).await?;
        Ok(contact)
    }

    /// Updates a contact's fields.
    pub async fn update_contact(
        &self,
        ctx: &RequestContext,
        contact_id: Uuid,
        data: UpdateContact,
    ) -> Result<Contact, AppError> {
        self.find_authorized(ctx, contact_id, ResourceAction::Update)
            .await?;

        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Contact name cannot be empty"));
            }
        }

        self.contact_repo.update(contact_id, &data).await
    }

    /// Deletes a contact.
    pub async fn delete_contact(
        &self,
        ctx: &RequestContext,
        contact_id: Uuid,
    ) -> Result<(), AppError> {
        self.find_authorized(ctx, contact_id, ResourceAction::Delete)
            .await?;

        self.contact_repo.delete(contact_id).await?;

        info!(contact_id = %contact_id, owner = %ctx.name, "Contact removed");

        Ok(())
    }

    /// Looks a contact up and runs the ownership guard.
    async fn find_authorized(
        &self,
        ctx: &RequestContext,
        contact_id: Uuid,
        action: ResourceAction,
    ) -> Result<Contact, AppError> {
        let contact = self
            .contact_repo
            .find_by_id(contact_id)
            .await?
            .ok_or_else(|| AppError::not_found("Contact not found"))?;

        self.guard.authorize(ctx.user_id, contact.owner_id, action)?;

        Ok(contact)
    }
}
