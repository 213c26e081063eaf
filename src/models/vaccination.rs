// src/models/vaccination.rs
// DOCUMENTATION: Vaccination schedule data structures
// PURPOSE: Scheduled vaccinations per batch with a derived display status

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Derived display status of a scheduled vaccination
/// DOCUMENTATION: Never stored - computed from scheduled_for and
/// completed_on relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaccinationStatus {
    Pending,
    Completed,
    Overdue,
}

/// Represents a vaccination schedule entry from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vaccination {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Batch this vaccination applies to
    pub batch_id: Uuid,

    /// Vaccine name (e.g. "Newcastle", "Gumboro")
    pub vaccine_name: String,

    /// Day the vaccination is due
    pub scheduled_for: NaiveDate,

    /// Day the vaccination was administered, when done
    pub completed_on: Option<NaiveDate>,

    /// Free-form notes
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for POST /vaccinations
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateVaccinationRequest {
    pub batch_id: Uuid,

    #[validate(length(min = 1, max = 120))]
    pub vaccine_name: String,

    pub scheduled_for: NaiveDate,

    #[serde(default)]
    pub notes: Option<String>,
}

/// Request DTO for PATCH /vaccinations/{id}
/// DOCUMENTATION: Marks the entry completed; the date defaults to today
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CompleteVaccinationRequest {
    #[serde(default)]
    pub completed_on: Option<NaiveDate>,
}

/// Response DTO for API responses
/// DOCUMENTATION: Carries the joined batch name and the derived status
#[derive(Debug, Serialize, Deserialize)]
pub struct VaccinationResponse {
    pub id: Uuid,
    pub batch_id: Uuid,
    pub batch_name: String,
    pub vaccine_name: String,
    pub scheduled_for: NaiveDate,
    pub completed_on: Option<NaiveDate>,
    pub status: VaccinationStatus,
    pub notes: Option<String>,
}
