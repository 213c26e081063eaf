// src/models/transaction.rs
// DOCUMENTATION: Core data structures for the financial ledger
// PURPOSE: Defines all serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Ledger entry kind: money out or money in
pub const ENTRY_EXPENSE: &str = "expense";
pub const ENTRY_INCOME: &str = "income";

/// Ledger category used for transactions mirrored from feed purchases
pub const CATEGORY_FEED: &str = "Feed";

/// Represents a financial ledger entry from the database
/// DOCUMENTATION: This struct maps directly to the transactions table
/// Invariant: at most one transaction references a given feed purchase
/// at any time; the pair is kept consistent by the feed service
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// "expense" or "income"
    #[serde(rename = "type")]
    pub entry_type: String,

    /// Free-form category (Feed, Eggs, Medication, ...)
    pub category: String,

    /// Entry amount, always positive
    pub amount: f64,

    /// Human-readable description
    pub description: String,

    /// Back-reference to the feed purchase this entry mirrors, if any
    pub feed_id: Option<Uuid>,

    /// Ledger date of the entry
    pub occurred_on: DateTime<Utc>,

    /// When record was created
    pub created_at: DateTime<Utc>,
}

fn validate_entry_type(entry_type: &str) -> Result<(), ValidationError> {
    if entry_type == ENTRY_EXPENSE || entry_type == ENTRY_INCOME {
        Ok(())
    } else {
        Err(ValidationError::new("entry_type"))
    }
}

/// Request DTO for creating a manual ledger entry
/// DOCUMENTATION: Data transfer object for POST /transactions endpoint
/// feed_id is intentionally absent - feed links are owned by the feed
/// service and never client-settable
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateTransactionRequest {
    /// "expense" or "income" (required)
    #[serde(rename = "type")]
    #[validate(custom = "validate_entry_type")]
    pub entry_type: String,

    /// Category (required)
    #[validate(length(min = 1, max = 80))]
    pub category: String,

    /// Amount (required, positive)
    #[validate(range(min = 0.01))]
    pub amount: f64,

    /// Description (required)
    #[validate(length(min = 1, max = 255))]
    pub description: String,

    /// Ledger date (defaults to now when omitted)
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Response DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub feed_id: Option<Uuid>,
    pub occurred_on: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Paginated ledger listing
/// DOCUMENTATION: DTO for returning transactions with pagination metadata
#[derive(Debug, Serialize)]
pub struct TransactionListResponse {
    /// Array of ledger entries
    pub data: Vec<TransactionResponse>,

    /// Total number of entries (regardless of pagination)
    pub total_count: i64,

    /// Current page number
    pub page: i64,

    /// Results per page
    pub limit: i64,

    /// Whether more results exist on next page
    pub has_more: bool,
}

/// Query parameters for ledger pagination
#[derive(Debug, Deserialize)]
pub struct LedgerQuery {
    /// Page number (1-based)
    pub page: Option<i64>,

    /// Results per page (max 100)
    pub limit: Option<i64>,
}

/// Aggregate totals across the whole ledger
/// DOCUMENTATION: DTO for GET /transactions/summary endpoint
#[derive(Debug, Serialize, PartialEq)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// One month of income/expense totals for the finances chart
#[derive(Debug, Serialize, PartialEq)]
pub struct MonthlyCashflow {
    /// Short month label, e.g. "Mar"
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

impl Transaction {
    /// Convert Transaction to TransactionResponse for API
    pub fn to_response(&self) -> TransactionResponse {
        TransactionResponse {
            id: self.id,
            entry_type: self.entry_type.clone(),
            category: self.category.clone(),
            amount: self.amount,
            description: self.description.clone(),
            feed_id: self.feed_id,
            occurred_on: self.occurred_on,
            created_at: self.created_at,
        }
    }
}
