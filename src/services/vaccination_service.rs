// src/services/vaccination_service.rs
// DOCUMENTATION: Business logic for vaccination schedules
// PURPOSE: Scheduling, completion, and the derived display status

use crate::db::{BatchRepository, VaccinationRepository, VaccinationRow};
use crate::errors::FarmError;
use crate::models::{
    CompleteVaccinationRequest, CreateVaccinationRequest, VaccinationResponse, VaccinationStatus,
};
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Derive the display status of a schedule entry
/// DOCUMENTATION: Completed always wins; an uncompleted entry is overdue
/// strictly after its scheduled day, and pending up to and including it
pub fn derive_status(
    scheduled_for: NaiveDate,
    completed_on: Option<NaiveDate>,
    today: NaiveDate,
) -> VaccinationStatus {
    if completed_on.is_some() {
        VaccinationStatus::Completed
    } else if scheduled_for < today {
        VaccinationStatus::Overdue
    } else {
        VaccinationStatus::Pending
    }
}

pub struct VaccinationService;

impl VaccinationService {
    /// Schedule a vaccination for a batch
    /// DOCUMENTATION: The batch must exist and belong to the caller
    pub async fn schedule(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateVaccinationRequest,
    ) -> Result<VaccinationResponse, FarmError> {
        let batch = BatchRepository::get_by_id(pool, user_id, req.batch_id).await?;
        let vaccination = VaccinationRepository::create_vaccination(pool, user_id, &req).await?;

        let today = Utc::now().date_naive();
        Ok(VaccinationResponse {
            id: vaccination.id,
            batch_id: vaccination.batch_id,
            batch_name: batch.name,
            vaccine_name: vaccination.vaccine_name,
            scheduled_for: vaccination.scheduled_for,
            completed_on: vaccination.completed_on,
            status: derive_status(vaccination.scheduled_for, vaccination.completed_on, today),
            notes: vaccination.notes,
        })
    }

    /// List the schedule with derived statuses, soonest due first
    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        batch_id: Option<Uuid>,
    ) -> Result<Vec<VaccinationResponse>, FarmError> {
        let rows = VaccinationRepository::list(pool, user_id, batch_id).await?;
        let today = Utc::now().date_naive();
        Ok(rows.into_iter().map(|r| Self::row_to_response(r, today)).collect())
    }

    /// Mark a schedule entry completed
    /// DOCUMENTATION: Rejected with 409 when the entry was already
    /// completed; the completion date defaults to today
    pub async fn complete(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        req: CompleteVaccinationRequest,
    ) -> Result<VaccinationResponse, FarmError> {
        let existing = VaccinationRepository::get_by_id(pool, user_id, id).await?;
        if existing.completed_on.is_some() {
            return Err(FarmError::AlreadyExists(format!(
                "Vaccination {} is already completed",
                id
            )));
        }

        let today = Utc::now().date_naive();
        let completed_on = req.completed_on.unwrap_or(today);
        let vaccination =
            VaccinationRepository::mark_completed(pool, user_id, id, completed_on).await?;

        let batch = BatchRepository::get_by_id(pool, user_id, vaccination.batch_id).await?;
        Ok(VaccinationResponse {
            id: vaccination.id,
            batch_id: vaccination.batch_id,
            batch_name: batch.name,
            vaccine_name: vaccination.vaccine_name,
            scheduled_for: vaccination.scheduled_for,
            completed_on: vaccination.completed_on,
            status: derive_status(vaccination.scheduled_for, vaccination.completed_on, today),
            notes: vaccination.notes,
        })
    }

    /// Delete a schedule entry
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), FarmError> {
        VaccinationRepository::delete_vaccination(pool, user_id, id).await
    }

    fn row_to_response(row: VaccinationRow, today: NaiveDate) -> VaccinationResponse {
        VaccinationResponse {
            id: row.id,
            batch_id: row.batch_id,
            batch_name: row.batch_name,
            vaccine_name: row.vaccine_name,
            scheduled_for: row.scheduled_for,
            completed_on: row.completed_on,
            status: derive_status(row.scheduled_for, row.completed_on, today),
            notes: row.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_completed_wins_even_when_late() {
        let status = derive_status(d(2025, 1, 1), Some(d(2025, 3, 1)), d(2025, 8, 6));
        assert_eq!(status, VaccinationStatus::Completed);
    }

    #[test]
    fn test_overdue_when_scheduled_day_has_passed() {
        let status = derive_status(d(2025, 8, 5), None, d(2025, 8, 6));
        assert_eq!(status, VaccinationStatus::Overdue);
    }

    #[test]
    fn test_pending_on_the_scheduled_day() {
        // Due today is not yet overdue
        let status = derive_status(d(2025, 8, 6), None, d(2025, 8, 6));
        assert_eq!(status, VaccinationStatus::Pending);
    }

    #[test]
    fn test_pending_before_the_scheduled_day() {
        let status = derive_status(d(2025, 9, 1), None, d(2025, 8, 6));
        assert_eq!(status, VaccinationStatus::Pending);
    }
}
