// src/models/mortality.rs
// DOCUMENTATION: Mortality record data structures
// PURPOSE: Bird losses per batch

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A recorded loss of birds in a batch
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Mortality {
    pub id: Uuid,
    pub user_id: Uuid,
    pub batch_id: Uuid,

    /// Calendar day of the loss
    pub recorded_on: NaiveDate,

    /// Number of birds lost
    pub count: i32,

    /// Suspected cause, if known
    pub cause: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Request DTO for POST /mortality
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateMortalityRequest {
    pub batch_id: Uuid,

    /// Defaults to today when omitted
    #[serde(default)]
    pub recorded_on: Option<NaiveDate>,

    #[validate(range(min = 1))]
    pub count: i32,

    #[serde(default)]
    pub cause: Option<String>,
}

/// Response DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct MortalityResponse {
    pub id: Uuid,
    pub batch_id: Uuid,
    pub recorded_on: NaiveDate,
    pub count: i32,
    pub cause: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Mortality {
    pub fn to_response(&self) -> MortalityResponse {
        MortalityResponse {
            id: self.id,
            batch_id: self.batch_id,
            recorded_on: self.recorded_on,
            count: self.count,
            cause: self.cause.clone(),
            created_at: self.created_at,
        }
    }
}
