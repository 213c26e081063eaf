// src/services/feed_service.rs
// DOCUMENTATION: Business logic for feed purchases
// PURPOSE: Keeps each purchase and its mirrored ledger entry consistent

use crate::db::{FeedRepository, TransactionRepository};
use crate::errors::FarmError;
use crate::models::{FeedPayload, FeedResponse, CATEGORY_FEED, ENTRY_EXPENSE};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

/// What the ledger needs after a feed purchase changed
/// DOCUMENTATION: A purchase with a positive price is mirrored by exactly
/// one expense entry; a zero-priced purchase has none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerAction {
    /// No entry exists, price is positive: create one
    Create,
    /// An entry exists, price is positive: overwrite amount/description/date
    Update,
    /// An entry exists, price dropped to zero: remove it
    Delete,
    /// No entry exists, price is zero: nothing to do
    Keep,
}

/// Decide how to reconcile the mirrored ledger entry
pub fn plan_ledger_entry(has_linked_entry: bool, price: f64) -> LedgerAction {
    match (has_linked_entry, price > 0.0) {
        (true, true) => LedgerAction::Update,
        (true, false) => LedgerAction::Delete,
        (false, true) => LedgerAction::Create,
        (false, false) => LedgerAction::Keep,
    }
}

/// Description written on mirrored ledger entries
pub fn purchase_description(bags: i32, feed_type: &str, total_kg: f64) -> String {
    format!(
        "Feed purchase: {} bags of {} ({}kg total)",
        bags, feed_type, total_kg
    )
}

pub struct FeedService;

impl FeedService {
    /// Record a feed purchase
    /// DOCUMENTATION: Creates the mirrored expense entry when the purchase
    /// carries a positive price
    pub async fn create_feed(
        pool: &PgPool,
        user_id: Uuid,
        payload: FeedPayload,
    ) -> Result<FeedResponse, FarmError> {
        let total_kg = payload.bags as f64 * payload.kg_per_bag;
        let purchased_at = payload.date.unwrap_or_else(Utc::now);

        let feed =
            FeedRepository::create_feed(pool, user_id, &payload, total_kg, purchased_at).await?;

        if feed.price > 0.0 {
            TransactionRepository::create_transaction(
                pool,
                user_id,
                ENTRY_EXPENSE,
                CATEGORY_FEED,
                feed.price,
                &purchase_description(feed.bags, &feed.feed_type, feed.total_kg),
                Some(feed.id),
                feed.purchased_at,
            )
            .await?;
        }

        Ok(feed.to_response())
    }

    /// List the user's feed purchases
    pub async fn list_feeds(pool: &PgPool, user_id: Uuid) -> Result<Vec<FeedResponse>, FarmError> {
        let feeds = FeedRepository::list(pool, user_id).await?;
        Ok(feeds.iter().map(|f| f.to_response()).collect())
    }

    /// Update a feed purchase and reconcile its ledger entry
    /// DOCUMENTATION: Used by PATCH /feed/{id}. After the purchase row is
    /// rewritten the mirrored entry is created, overwritten or deleted so
    /// that it exists exactly when the current price is positive
    pub async fn update_feed(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        payload: FeedPayload,
    ) -> Result<FeedResponse, FarmError> {
        let existing = FeedRepository::get_by_id(pool, user_id, id).await?;

        let total_kg = payload.bags as f64 * payload.kg_per_bag;
        let purchased_at = payload.date.unwrap_or(existing.purchased_at);

        let updated =
            FeedRepository::update_feed(pool, user_id, id, &payload, total_kg, purchased_at)
                .await?;

        let linked = TransactionRepository::get_by_feed_id(pool, user_id, id).await?;
        let description =
            purchase_description(updated.bags, &updated.feed_type, updated.total_kg);

        match plan_ledger_entry(linked.is_some(), updated.price) {
            LedgerAction::Update => {
                if let Some(entry) = linked {
                    TransactionRepository::update_mirrored(
                        pool,
                        entry.id,
                        updated.price,
                        &description,
                        updated.purchased_at,
                    )
                    .await?;
                }
            }
            LedgerAction::Delete => {
                TransactionRepository::delete_by_feed_id(pool, user_id, id).await?;
            }
            LedgerAction::Create => {
                TransactionRepository::create_transaction(
                    pool,
                    user_id,
                    ENTRY_EXPENSE,
                    CATEGORY_FEED,
                    updated.price,
                    &description,
                    Some(updated.id),
                    updated.purchased_at,
                )
                .await?;
            }
            LedgerAction::Keep => {}
        }

        Ok(updated.to_response())
    }

    /// Delete a feed purchase together with its mirrored ledger entry
    pub async fn delete_feed(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), FarmError> {
        // Verify the purchase exists and is owned before touching the ledger
        let _ = FeedRepository::get_by_id(pool, user_id, id).await?;

        // Ledger entry first: the foreign key points at the purchase
        TransactionRepository::delete_by_feed_id(pool, user_id, id).await?;
        FeedRepository::delete_feed(pool, user_id, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_updates_existing_entry_when_priced() {
        assert_eq!(plan_ledger_entry(true, 5000.0), LedgerAction::Update);
    }

    #[test]
    fn test_plan_deletes_entry_when_price_zeroed() {
        assert_eq!(plan_ledger_entry(true, 0.0), LedgerAction::Delete);
    }

    #[test]
    fn test_plan_creates_entry_when_newly_priced() {
        assert_eq!(plan_ledger_entry(false, 1.0), LedgerAction::Create);
    }

    #[test]
    fn test_plan_keeps_nothing_when_unpriced() {
        assert_eq!(plan_ledger_entry(false, 0.0), LedgerAction::Keep);
    }

    #[test]
    fn test_entry_exists_iff_price_positive() {
        // The reconciliation property: whatever the starting state, the
        // action leaves an entry exactly when the price is positive
        for has_entry in [true, false] {
            for price in [0.0, 0.01, 250.0] {
                let after = match plan_ledger_entry(has_entry, price) {
                    LedgerAction::Create | LedgerAction::Update => true,
                    LedgerAction::Delete | LedgerAction::Keep => false,
                };
                assert_eq!(after, price > 0.0);
            }
        }
    }

    #[test]
    fn test_purchase_description_format() {
        assert_eq!(
            purchase_description(5, "Layer", 350.0),
            "Feed purchase: 5 bags of Layer (350kg total)"
        );
    }

    #[test]
    fn test_purchase_description_fractional_kg() {
        assert_eq!(
            purchase_description(3, "Starter", 37.5),
            "Feed purchase: 3 bags of Starter (37.5kg total)"
        );
    }
}
