//! Contact repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use rolodex_core::error::{AppError, ErrorKind};
use rolodex_core::result::AppResult;
use rolodex_entity::contact::{Contact, CreateContact, UpdateContact};

/// Repository for contact CRUD and per-owner listing.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Create a new contact repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a contact by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Contact>> {
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find contact by id", e)
            })
    }

    /// List all contacts belonging to an owner, most recent first.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Contact>> {
        sqlx::query_as::<_, Contact>(
            "SELECT * FROM contacts WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list contacts", e))
    }

    /// Create a new contact for the given owner.
    pub async fn create(&self, owner_id: Uuid, data: &CreateContact) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (owner_id, name, email, phone, kind) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(owner_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.kind)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create contact", e))
    }

    /// Update a contact's fields, leaving unsupplied ones unchanged.
    pub async fn update(&self, id: Uuid, data: &UpdateContact) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET name = COALESCE($2, name), \
                                 email = COALESCE($3, email), \
                                 phone = COALESCE($4, phone), \
                                 kind = COALESCE($5, kind), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.kind)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update contact", e))?
        .ok_or_else(|| AppError::not_found("Contact not found"))
    }

    /// Delete a contact by ID. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete contact", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
