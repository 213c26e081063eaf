// src/models/feed.rs
// DOCUMENTATION: Core data structures for feed purchases
// PURPOSE: Defines all serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a complete feed purchase record from the database
/// DOCUMENTATION: This struct maps directly to the feed_purchases table
/// A purchase with a positive price is mirrored by exactly one expense
/// transaction in the ledger; a zero-priced purchase has none
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feed {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Feed type: Starter, Grower, Layer, etc.
    #[serde(rename = "type")]
    pub feed_type: String,

    /// Total purchase price (zero means donated / untracked cost)
    pub price: f64,

    /// Number of bags purchased
    pub bags: i32,

    /// Weight per bag in kilograms
    pub kg_per_bag: f64,

    /// Derived total weight: bags * kg_per_bag
    pub total_kg: f64,

    /// When the purchase happened
    pub purchased_at: DateTime<Utc>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating or replacing a feed purchase
/// DOCUMENTATION: Data transfer object for POST /feed and PATCH /feed/{id}
/// Both endpoints accept the same shape; total_kg is always recomputed
/// server-side
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FeedPayload {
    /// Feed type (required)
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 80))]
    pub feed_type: String,

    /// Total purchase price (required, may be zero)
    #[validate(range(min = 0.0))]
    pub price: f64,

    /// Number of bags (required, at least 1)
    #[validate(range(min = 1))]
    pub bags: i32,

    /// Weight per bag in kilograms (required, positive)
    #[validate(range(min = 0.1))]
    pub kg_per_bag: f64,

    /// Purchase date; defaults to now on create, keeps the stored
    /// date on update when omitted
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Response DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub feed_type: String,
    pub price: f64,
    pub bags: i32,
    pub kg_per_bag: f64,
    pub total_kg: f64,
    pub purchased_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feed {
    /// Convert Feed to FeedResponse for API
    pub fn to_response(&self) -> FeedResponse {
        FeedResponse {
            id: self.id,
            feed_type: self.feed_type.clone(),
            price: self.price,
            bags: self.bags,
            kg_per_bag: self.kg_per_bag,
            total_kg: self.total_kg,
            purchased_at: self.purchased_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
