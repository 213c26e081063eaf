// src/db/batch_repository.rs
// DOCUMENTATION: Database access layer for poultry batches
// PURPOSE: Abstract batch SQL from business logic

use crate::errors::FarmError;
use crate::models::{Batch, CreateBatchRequest, UpdateBatchRequest};
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

const BATCH_COLUMNS: &str =
    "id, user_id, batch_code, name, breed, bird_count, start_date, notes, created_at, updated_at";

/// BatchRepository: All database operations for batches
/// DOCUMENTATION: Every query is scoped to the owning user
pub struct BatchRepository;

impl BatchRepository {
    /// Create new batch in database
    /// DOCUMENTATION: Inserts batch and returns created record
    /// Used by POST /batches endpoint; the code is generated by the service
    pub async fn create_batch(
        pool: &PgPool,
        user_id: Uuid,
        batch_code: &str,
        start_date: NaiveDate,
        req: &CreateBatchRequest,
    ) -> Result<Batch, FarmError> {
        let batch = sqlx::query_as::<_, Batch>(&format!(
            r#"
            INSERT INTO batches (user_id, batch_code, name, breed, bird_count, start_date, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING {}
            "#,
            BATCH_COLUMNS
        ))
        .bind(user_id)
        .bind(batch_code)
        .bind(&req.name)
        .bind(&req.breed)
        .bind(req.bird_count)
        .bind(start_date)
        .bind(&req.notes)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create batch: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        log::info!("Created batch {} ({})", batch.id, batch.batch_code);
        Ok(batch)
    }

    /// Retrieve batch by ID
    /// DOCUMENTATION: Used for GET /batches/{id} endpoint and ownership checks
    pub async fn get_by_id(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<Batch, FarmError> {
        let batch = sqlx::query_as::<_, Batch>(&format!(
            "SELECT {} FROM batches WHERE id = $1 AND user_id = $2",
            BATCH_COLUMNS
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching batch: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Batch not found: {}", id);
            FarmError::NotFound(format!("Batch {}", id))
        })?;

        Ok(batch)
    }

    /// List the user's batches, newest start date first
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<Batch>, FarmError> {
        let batches = sqlx::query_as::<_, Batch>(&format!(
            "SELECT {} FROM batches WHERE user_id = $1 ORDER BY start_date DESC, created_at DESC",
            BATCH_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list batches: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok(batches)
    }

    /// Update existing batch
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update_batch(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        req: &UpdateBatchRequest,
    ) -> Result<Batch, FarmError> {
        let batch = sqlx::query_as::<_, Batch>(&format!(
            r#"
            UPDATE batches
            SET name = COALESCE($1, name),
                breed = COALESCE($2, breed),
                bird_count = COALESCE($3, bird_count),
                start_date = COALESCE($4, start_date),
                notes = COALESCE($5, notes),
                updated_at = NOW()
            WHERE id = $6 AND user_id = $7
            RETURNING {}
            "#,
            BATCH_COLUMNS
        ))
        .bind(&req.name)
        .bind(&req.breed)
        .bind(req.bird_count)
        .bind(req.start_date)
        .bind(&req.notes)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for batch {}: {}", id, e);
            FarmError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| FarmError::NotFound(format!("Batch {}", id)))?;

        log::info!("Updated batch: {}", id);
        Ok(batch)
    }

    /// Delete batch
    pub async fn delete_batch(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), FarmError> {
        let rows = sqlx::query("DELETE FROM batches WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for batch {}: {}", id, e);
                FarmError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(FarmError::NotFound(format!("Batch {}", id)));
        }

        log::info!("Deleted batch: {}", id);
        Ok(())
    }

    /// Check whether a generated batch code is already taken
    pub async fn code_exists(pool: &PgPool, code: &str) -> Result<bool, FarmError> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM batches WHERE batch_code = $1)")
                .bind(code)
                .fetch_one(pool)
                .await
                .map_err(|e| {
                    log::error!("Batch code lookup failed: {}", e);
                    FarmError::DatabaseError(e.to_string())
                })?;

        Ok(row.0)
    }
}
