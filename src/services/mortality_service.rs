// src/services/mortality_service.rs
// DOCUMENTATION: Business logic for mortality records
// PURPOSE: Thin layer adding batch ownership checks and date defaults

use crate::db::{BatchRepository, MortalityRepository};
use crate::errors::FarmError;
use crate::models::{CreateMortalityRequest, MortalityResponse};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct MortalityService;

impl MortalityService {
    /// Record a loss; the batch must exist and belong to the caller
    pub async fn record_loss(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateMortalityRequest,
    ) -> Result<MortalityResponse, FarmError> {
        let _ = BatchRepository::get_by_id(pool, user_id, req.batch_id).await?;

        let recorded_on = req.recorded_on.unwrap_or_else(|| Utc::now().date_naive());
        let mortality =
            MortalityRepository::create_mortality(pool, user_id, recorded_on, &req).await?;
        Ok(mortality.to_response())
    }

    /// List loss records, optionally scoped to a batch
    pub async fn list_losses(
        pool: &PgPool,
        user_id: Uuid,
        batch_id: Option<Uuid>,
    ) -> Result<Vec<MortalityResponse>, FarmError> {
        let records = MortalityRepository::list(pool, user_id, batch_id).await?;
        Ok(records.iter().map(|m| m.to_response()).collect())
    }

    /// Delete a loss record
    pub async fn delete_loss(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), FarmError> {
        MortalityRepository::delete_mortality(pool, user_id, id).await
    }
}
