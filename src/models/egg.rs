// src/models/egg.rs
// DOCUMENTATION: Egg collection data structures
// PURPOSE: Daily egg records scoped to a batch, aggregated for the dashboard chart

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// One day's egg numbers for a batch
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Egg {
    pub id: Uuid,
    pub user_id: Uuid,
    pub batch_id: Uuid,

    /// Calendar day the eggs were collected
    pub laid_on: NaiveDate,

    pub collected: i32,
    pub sold: i32,
    pub spoiled: i32,

    pub created_at: DateTime<Utc>,
}

/// Request DTO for POST /eggs
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateEggRequest {
    pub batch_id: Uuid,

    /// Defaults to today when omitted
    #[serde(default)]
    pub laid_on: Option<NaiveDate>,

    #[validate(range(min = 0))]
    pub collected: i32,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub sold: i32,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub spoiled: i32,
}

/// Response DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct EggResponse {
    pub id: Uuid,
    pub batch_id: Uuid,
    pub laid_on: NaiveDate,
    pub collected: i32,
    pub sold: i32,
    pub spoiled: i32,
    pub created_at: DateTime<Utc>,
}

/// One month of egg totals for the dashboard chart
/// DOCUMENTATION: DTO for GET /eggs/stats endpoint
#[derive(Debug, Serialize, PartialEq)]
pub struct MonthlyEggStats {
    /// Short month label, e.g. "Mar"
    pub month: String,
    pub collected: i64,
    pub sold: i64,
    pub spoiled: i64,
}

impl Egg {
    pub fn to_response(&self) -> EggResponse {
        EggResponse {
            id: self.id,
            batch_id: self.batch_id,
            laid_on: self.laid_on,
            collected: self.collected,
            sold: self.sold,
            spoiled: self.spoiled,
            created_at: self.created_at,
        }
    }
}
