// src/db/egg_repository.rs
// DOCUMENTATION: Database access layer for egg records
// PURPOSE: Daily record CRUD plus the window fetch behind the stats chart

use crate::errors::FarmError;
use crate::models::{CreateEggRequest, Egg};
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

const EGG_COLUMNS: &str = "id, user_id, batch_id, laid_on, collected, sold, spoiled, created_at";

/// EggRepository: All database operations for egg records
pub struct EggRepository;

impl EggRepository {
    /// Insert a day's egg numbers
    pub async fn create_egg(
        pool: &PgPool,
        user_id: Uuid,
        laid_on: NaiveDate,
        req: &CreateEggRequest,
    ) -> Result<Egg, FarmError> {
        let egg = sqlx::query_as::<_, Egg>(&format!(
            r#"
            INSERT INTO eggs (user_id, batch_id, laid_on, collected, sold, spoiled, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING {}
            "#,
            EGG_COLUMNS
        ))
        .bind(user_id)
        .bind(req.batch_id)
        .bind(laid_on)
        .bind(req.collected)
        .bind(req.sold)
        .bind(req.spoiled)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create egg record: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok(egg)
    }

    /// List egg records, optionally scoped to a batch, newest first
    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        batch_id: Option<Uuid>,
    ) -> Result<Vec<Egg>, FarmError> {
        let eggs = sqlx::query_as::<_, Egg>(&format!(
            r#"
            SELECT {} FROM eggs
            WHERE user_id = $1 AND ($2::uuid IS NULL OR batch_id = $2)
            ORDER BY laid_on DESC, created_at DESC
            "#,
            EGG_COLUMNS
        ))
        .bind(user_id)
        .bind(batch_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list egg records: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok(eggs)
    }

    /// Fetch records on or after the cutoff for stats aggregation
    /// DOCUMENTATION: The service buckets these into the 6-month chart window
    pub async fn list_since(
        pool: &PgPool,
        user_id: Uuid,
        batch_id: Option<Uuid>,
        since: NaiveDate,
    ) -> Result<Vec<Egg>, FarmError> {
        let eggs = sqlx::query_as::<_, Egg>(&format!(
            r#"
            SELECT {} FROM eggs
            WHERE user_id = $1
              AND ($2::uuid IS NULL OR batch_id = $2)
              AND laid_on >= $3
            ORDER BY laid_on
            "#,
            EGG_COLUMNS
        ))
        .bind(user_id)
        .bind(batch_id)
        .bind(since)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch egg stats window: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok(eggs)
    }

    /// Delete an egg record
    pub async fn delete_egg(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), FarmError> {
        let rows = sqlx::query("DELETE FROM eggs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for egg record {}: {}", id, e);
                FarmError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(FarmError::NotFound(format!("Egg record {}", id)));
        }

        Ok(())
    }
}
