// src/db/vaccination_repository.rs
// DOCUMENTATION: Database access layer for vaccination schedules
// PURPOSE: Schedule CRUD with the batch name joined in for display

use crate::errors::FarmError;
use crate::models::{CreateVaccinationRequest, Vaccination};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const VACCINATION_COLUMNS: &str = "id, user_id, batch_id, vaccine_name, scheduled_for, completed_on, notes, created_at, updated_at";

/// Internal struct for the schedule listing join
/// DOCUMENTATION: Carries the batch name alongside the schedule row
#[derive(Debug, FromRow)]
pub struct VaccinationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub batch_id: Uuid,
    pub batch_name: String,
    pub vaccine_name: String,
    pub scheduled_for: NaiveDate,
    pub completed_on: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// VaccinationRepository: All database operations for vaccination schedules
pub struct VaccinationRepository;

impl VaccinationRepository {
    /// Insert a scheduled vaccination
    pub async fn create_vaccination(
        pool: &PgPool,
        user_id: Uuid,
        req: &CreateVaccinationRequest,
    ) -> Result<Vaccination, FarmError> {
        let vaccination = sqlx::query_as::<_, Vaccination>(&format!(
            r#"
            INSERT INTO vaccinations
                (user_id, batch_id, vaccine_name, scheduled_for, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING {}
            "#,
            VACCINATION_COLUMNS
        ))
        .bind(user_id)
        .bind(req.batch_id)
        .bind(&req.vaccine_name)
        .bind(req.scheduled_for)
        .bind(&req.notes)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create vaccination: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        log::info!("Scheduled vaccination: {}", vaccination.id);
        Ok(vaccination)
    }

    /// Retrieve a schedule entry by ID
    pub async fn get_by_id(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Vaccination, FarmError> {
        let vaccination = sqlx::query_as::<_, Vaccination>(&format!(
            "SELECT {} FROM vaccinations WHERE id = $1 AND user_id = $2",
            VACCINATION_COLUMNS
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching vaccination: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Vaccination not found: {}", id);
            FarmError::NotFound(format!("Vaccination {}", id))
        })?;

        Ok(vaccination)
    }

    /// List schedule entries with batch names, soonest due first
    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        batch_id: Option<Uuid>,
    ) -> Result<Vec<VaccinationRow>, FarmError> {
        let rows = sqlx::query_as::<_, VaccinationRow>(
            r#"
            SELECT
                v.id, v.user_id, v.batch_id, b.name AS batch_name,
                v.vaccine_name, v.scheduled_for, v.completed_on, v.notes,
                v.created_at, v.updated_at
            FROM vaccinations v
            JOIN batches b ON b.id = v.batch_id
            WHERE v.user_id = $1 AND ($2::uuid IS NULL OR v.batch_id = $2)
            ORDER BY v.scheduled_for ASC
            "#,
        )
        .bind(user_id)
        .bind(batch_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list vaccinations: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok(rows)
    }

    /// Record the completion date of a schedule entry
    pub async fn mark_completed(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        completed_on: NaiveDate,
    ) -> Result<Vaccination, FarmError> {
        let vaccination = sqlx::query_as::<_, Vaccination>(&format!(
            r#"
            UPDATE vaccinations
            SET completed_on = $1, updated_at = NOW()
            WHERE id = $2 AND user_id = $3
            RETURNING {}
            "#,
            VACCINATION_COLUMNS
        ))
        .bind(completed_on)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Completion update failed for vaccination {}: {}", id, e);
            FarmError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| FarmError::NotFound(format!("Vaccination {}", id)))?;

        log::info!("Completed vaccination: {}", id);
        Ok(vaccination)
    }

    /// Delete a schedule entry
    pub async fn delete_vaccination(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<(), FarmError> {
        let rows = sqlx::query("DELETE FROM vaccinations WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for vaccination {}: {}", id, e);
                FarmError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(FarmError::NotFound(format!("Vaccination {}", id)));
        }

        log::info!("Deleted vaccination: {}", id);
        Ok(())
    }
}
