// src/db/mortality_repository.rs
// DOCUMENTATION: Database access layer for mortality records
// PURPOSE: Simple owner-scoped CRUD for bird losses

use crate::errors::FarmError;
use crate::models::{CreateMortalityRequest, Mortality};
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

const MORTALITY_COLUMNS: &str = "id, user_id, batch_id, recorded_on, count, cause, created_at";

/// MortalityRepository: All database operations for mortality records
pub struct MortalityRepository;

impl MortalityRepository {
    /// Insert a loss record
    pub async fn create_mortality(
        pool: &PgPool,
        user_id: Uuid,
        recorded_on: NaiveDate,
        req: &CreateMortalityRequest,
    ) -> Result<Mortality, FarmError> {
        let mortality = sqlx::query_as::<_, Mortality>(&format!(
            r#"
            INSERT INTO mortality (user_id, batch_id, recorded_on, count, cause, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING {}
            "#,
            MORTALITY_COLUMNS
        ))
        .bind(user_id)
        .bind(req.batch_id)
        .bind(recorded_on)
        .bind(req.count)
        .bind(&req.cause)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create mortality record: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok(mortality)
    }

    /// List loss records, optionally scoped to a batch, newest first
    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        batch_id: Option<Uuid>,
    ) -> Result<Vec<Mortality>, FarmError> {
        let records = sqlx::query_as::<_, Mortality>(&format!(
            r#"
            SELECT {} FROM mortality
            WHERE user_id = $1 AND ($2::uuid IS NULL OR batch_id = $2)
            ORDER BY recorded_on DESC, created_at DESC
            "#,
            MORTALITY_COLUMNS
        ))
        .bind(user_id)
        .bind(batch_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list mortality records: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok(records)
    }

    /// Delete a loss record
    pub async fn delete_mortality(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), FarmError> {
        let rows = sqlx::query("DELETE FROM mortality WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for mortality record {}: {}", id, e);
                FarmError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(FarmError::NotFound(format!("Mortality record {}", id)));
        }

        Ok(())
    }
}
