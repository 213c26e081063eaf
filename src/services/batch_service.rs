// src/services/batch_service.rs
// DOCUMENTATION: Business logic for poultry batches
// PURPOSE: Batch CRUD plus server-side batch code generation

use crate::db::BatchRepository;
use crate::errors::FarmError;
use crate::models::{BatchResponse, CreateBatchRequest, UpdateBatchRequest};
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Generate a human-readable batch code
/// DOCUMENTATION: "B" + start date + random hex suffix, e.g. "B250806-3FA2C1";
/// uniqueness is re-checked against the database before insert
pub fn generate_batch_code(start_date: NaiveDate) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!(
        "B{}-{}",
        start_date.format("%y%m%d"),
        random[..6].to_uppercase()
    )
}

pub struct BatchService;

impl BatchService {
    /// Create a new batch with a generated unique code
    pub async fn create_batch(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateBatchRequest,
    ) -> Result<BatchResponse, FarmError> {
        let start_date = req.start_date.unwrap_or_else(|| Utc::now().date_naive());

        // Regenerate on the rare suffix collision
        let mut code = generate_batch_code(start_date);
        while BatchRepository::code_exists(pool, &code).await? {
            code = generate_batch_code(start_date);
        }

        let batch = BatchRepository::create_batch(pool, user_id, &code, start_date, &req).await?;
        Ok(batch.to_response())
    }

    /// List the caller's batches
    pub async fn list_batches(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<BatchResponse>, FarmError> {
        let batches = BatchRepository::list(pool, user_id).await?;
        Ok(batches.iter().map(|b| b.to_response()).collect())
    }

    /// Fetch one batch
    pub async fn get_batch(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<BatchResponse, FarmError> {
        let batch = BatchRepository::get_by_id(pool, user_id, id).await?;
        Ok(batch.to_response())
    }

    /// Partial update of a batch
    pub async fn update_batch(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        req: UpdateBatchRequest,
    ) -> Result<BatchResponse, FarmError> {
        let batch = BatchRepository::update_batch(pool, user_id, id, &req).await?;
        Ok(batch.to_response())
    }

    /// Delete a batch
    pub async fn delete_batch(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), FarmError> {
        BatchRepository::delete_batch(pool, user_id, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_code_embeds_start_date() {
        let code = generate_batch_code(d(2025, 8, 6));
        assert!(code.starts_with("B250806-"));
    }

    #[test]
    fn test_code_shape() {
        let code = generate_batch_code(d(2024, 1, 31));
        let (prefix, suffix) = code.split_once('-').unwrap();

        assert_eq!(prefix, "B240131");
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_codes_are_unique_across_calls() {
        let a = generate_batch_code(d(2025, 8, 6));
        let b = generate_batch_code(d(2025, 8, 6));
        assert_ne!(a, b);
    }
}
