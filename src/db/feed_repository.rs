// src/db/feed_repository.rs
// DOCUMENTATION: Database access layer for feed purchases
// PURPOSE: Abstract feed SQL from the ledger reconciliation logic

use crate::errors::FarmError;
use crate::models::{Feed, FeedPayload};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const FEED_COLUMNS: &str =
    "id, user_id, feed_type, price, bags, kg_per_bag, total_kg, purchased_at, created_at, updated_at";

/// FeedRepository: All database operations for feed purchases
/// DOCUMENTATION: Every query is scoped to the owning user
pub struct FeedRepository;

impl FeedRepository {
    /// Create new feed purchase in database
    /// DOCUMENTATION: total_kg is computed by the caller, never trusted
    /// from the wire
    pub async fn create_feed(
        pool: &PgPool,
        user_id: Uuid,
        req: &FeedPayload,
        total_kg: f64,
        purchased_at: DateTime<Utc>,
    ) -> Result<Feed, FarmError> {
        let feed = sqlx::query_as::<_, Feed>(&format!(
            r#"
            INSERT INTO feed_purchases
                (user_id, feed_type, price, bags, kg_per_bag, total_kg, purchased_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING {}
            "#,
            FEED_COLUMNS
        ))
        .bind(user_id)
        .bind(&req.feed_type)
        .bind(req.price)
        .bind(req.bags)
        .bind(req.kg_per_bag)
        .bind(total_kg)
        .bind(purchased_at)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create feed purchase: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        log::info!("Created feed purchase: {}", feed.id);
        Ok(feed)
    }

    /// Retrieve feed purchase by ID
    pub async fn get_by_id(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<Feed, FarmError> {
        let feed = sqlx::query_as::<_, Feed>(&format!(
            "SELECT {} FROM feed_purchases WHERE id = $1 AND user_id = $2",
            FEED_COLUMNS
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching feed purchase: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Feed purchase not found: {}", id);
            FarmError::NotFound(format!("Feed record {}", id))
        })?;

        Ok(feed)
    }

    /// List the user's feed purchases, newest first
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<Feed>, FarmError> {
        let feeds = sqlx::query_as::<_, Feed>(&format!(
            "SELECT {} FROM feed_purchases WHERE user_id = $1 ORDER BY purchased_at DESC",
            FEED_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list feed purchases: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok(feeds)
    }

    /// Replace the mutable fields of a feed purchase
    /// DOCUMENTATION: Used by PATCH /feed/{id}; the purchase date is kept
    /// when the payload omits it
    pub async fn update_feed(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        req: &FeedPayload,
        total_kg: f64,
        purchased_at: DateTime<Utc>,
    ) -> Result<Feed, FarmError> {
        let feed = sqlx::query_as::<_, Feed>(&format!(
            r#"
            UPDATE feed_purchases
            SET feed_type = $1,
                price = $2,
                bags = $3,
                kg_per_bag = $4,
                total_kg = $5,
                purchased_at = $6,
                updated_at = NOW()
            WHERE id = $7 AND user_id = $8
            RETURNING {}
            "#,
            FEED_COLUMNS
        ))
        .bind(&req.feed_type)
        .bind(req.price)
        .bind(req.bags)
        .bind(req.kg_per_bag)
        .bind(total_kg)
        .bind(purchased_at)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for feed purchase {}: {}", id, e);
            FarmError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| FarmError::NotFound(format!("Feed record {}", id)))?;

        log::info!("Updated feed purchase: {}", id);
        Ok(feed)
    }

    /// Delete feed purchase
    pub async fn delete_feed(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), FarmError> {
        let rows = sqlx::query("DELETE FROM feed_purchases WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for feed purchase {}: {}", id, e);
                FarmError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(FarmError::NotFound(format!("Feed record {}", id)));
        }

        log::info!("Deleted feed purchase: {}", id);
        Ok(())
    }
}
