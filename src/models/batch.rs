// src/models/batch.rs
// DOCUMENTATION: Core data structures for poultry batches
// PURPOSE: Defines all serialization/deserialization models for API and database

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a complete batch record from the database
/// DOCUMENTATION: This struct maps directly to the batches table
/// A batch is a tracked cohort of birds; eggs, vaccinations and
/// mortality records reference it
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Batch {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Unique human-readable code, generated server-side at creation
    pub batch_code: String,

    /// Batch name - required field
    pub name: String,

    /// Bird breed (e.g. "Kienyeji", "Broiler", "Layer")
    pub breed: String,

    /// Number of birds the batch started with
    pub bird_count: i32,

    /// Date the batch was started
    pub start_date: NaiveDate,

    /// Free-form notes
    pub notes: Option<String>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new batch
/// DOCUMENTATION: Data transfer object for POST /batches endpoint
/// The batch code is never client-supplied
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateBatchRequest {
    /// Batch name (required)
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    /// Bird breed (required)
    #[validate(length(min = 1, max = 80))]
    pub breed: String,

    /// Initial bird count (required, at least 1)
    #[validate(range(min = 1))]
    pub bird_count: i32,

    /// Start date (defaults to today when omitted)
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Optional notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request DTO for updating an existing batch
/// DOCUMENTATION: Data transfer object for PUT /batches/{id} endpoint
/// All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateBatchRequest {
    /// Updated name
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    /// Updated breed
    #[validate(length(min = 1, max = 80))]
    pub breed: Option<String>,

    /// Updated bird count
    #[validate(range(min = 0))]
    pub bird_count: Option<i32>,

    /// Updated start date
    pub start_date: Option<NaiveDate>,

    /// Updated notes
    pub notes: Option<String>,
}

/// Response DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub id: Uuid,
    pub batch_code: String,
    pub name: String,
    pub breed: String,
    pub bird_count: i32,
    pub start_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for batch-scoped listings
/// DOCUMENTATION: Shared by the eggs, vaccinations and mortality endpoints
#[derive(Debug, Deserialize)]
pub struct BatchFilterQuery {
    /// Restrict results to a single batch
    pub batch: Option<Uuid>,
}

impl Batch {
    /// Convert Batch to BatchResponse for API
    /// DOCUMENTATION: Excludes the internal owner id
    pub fn to_response(&self) -> BatchResponse {
        BatchResponse {
            id: self.id,
            batch_code: self.batch_code.clone(),
            name: self.name.clone(),
            breed: self.breed.clone(),
            bird_count: self.bird_count,
            start_date: self.start_date,
            notes: self.notes.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
