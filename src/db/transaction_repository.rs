// src/db/transaction_repository.rs
// DOCUMENTATION: Database access layer for the financial ledger
// PURPOSE: Ledger CRUD plus the aggregate queries behind the finance views

use crate::errors::FarmError;
use crate::models::Transaction;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const TRANSACTION_COLUMNS: &str =
    "id, user_id, entry_type, category, amount, description, feed_id, occurred_on, created_at";

/// Raw month aggregate row for the cashflow chart
#[derive(Debug, sqlx::FromRow)]
pub struct CashflowRow {
    pub month: DateTime<Utc>,
    pub income: f64,
    pub expense: f64,
}

/// TransactionRepository: All database operations for ledger entries
/// DOCUMENTATION: Every query is scoped to the owning user
pub struct TransactionRepository;

impl TransactionRepository {
    /// Insert a ledger entry
    /// DOCUMENTATION: feed_id is Some only for entries mirrored from a
    /// feed purchase by the feed service
    pub async fn create_transaction(
        pool: &PgPool,
        user_id: Uuid,
        entry_type: &str,
        category: &str,
        amount: f64,
        description: &str,
        feed_id: Option<Uuid>,
        occurred_on: DateTime<Utc>,
    ) -> Result<Transaction, FarmError> {
        let transaction = sqlx::query_as::<_, Transaction>(&format!(
            r#"
            INSERT INTO transactions
                (user_id, entry_type, category, amount, description, feed_id, occurred_on, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            RETURNING {}
            "#,
            TRANSACTION_COLUMNS
        ))
        .bind(user_id)
        .bind(entry_type)
        .bind(category)
        .bind(amount)
        .bind(description)
        .bind(feed_id)
        .bind(occurred_on)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create transaction: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        log::info!("Created transaction: {}", transaction.id);
        Ok(transaction)
    }

    /// Find the ledger entry mirroring a feed purchase, if one exists
    /// DOCUMENTATION: At most one such entry exists at any time
    pub async fn get_by_feed_id(
        pool: &PgPool,
        user_id: Uuid,
        feed_id: Uuid,
    ) -> Result<Option<Transaction>, FarmError> {
        let transaction = sqlx::query_as::<_, Transaction>(&format!(
            "SELECT {} FROM transactions WHERE feed_id = $1 AND user_id = $2",
            TRANSACTION_COLUMNS
        ))
        .bind(feed_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch transaction for feed {}: {}", feed_id, e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok(transaction)
    }

    /// Overwrite the mirrored fields of a feed-linked entry
    pub async fn update_mirrored(
        pool: &PgPool,
        id: Uuid,
        amount: f64,
        description: &str,
        occurred_on: DateTime<Utc>,
    ) -> Result<(), FarmError> {
        sqlx::query(
            r#"
            UPDATE transactions
            SET amount = $1, description = $2, occurred_on = $3
            WHERE id = $4
            "#,
        )
        .bind(amount)
        .bind(description)
        .bind(occurred_on)
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for transaction {}: {}", id, e);
            FarmError::DatabaseError(e.to_string())
        })?;

        log::info!("Updated mirrored transaction: {}", id);
        Ok(())
    }

    /// List ledger entries, newest first, with pagination
    /// DOCUMENTATION: Returns tuple (results, total_count) for pagination
    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Transaction>, i64), FarmError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM transactions WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await
                .map_err(|e| {
                    log::error!("Count query error: {}", e);
                    FarmError::DatabaseError(e.to_string())
                })?;

        let transactions = sqlx::query_as::<_, Transaction>(&format!(
            r#"
            SELECT {} FROM transactions
            WHERE user_id = $1
            ORDER BY occurred_on DESC, created_at DESC
            LIMIT $2 OFFSET $3
            "#,
            TRANSACTION_COLUMNS
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list transactions: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok((transactions, count.0))
    }

    /// Delete a ledger entry
    pub async fn delete_transaction(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<(), FarmError> {
        let rows = sqlx::query("DELETE FROM transactions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for transaction {}: {}", id, e);
                FarmError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(FarmError::NotFound(format!("Transaction {}", id)));
        }

        log::info!("Deleted transaction: {}", id);
        Ok(())
    }

    /// Delete the entry mirroring a feed purchase, if any
    /// DOCUMENTATION: Used when a purchase is zeroed or removed; deleting
    /// nothing is not an error
    pub async fn delete_by_feed_id(
        pool: &PgPool,
        user_id: Uuid,
        feed_id: Uuid,
    ) -> Result<u64, FarmError> {
        let rows = sqlx::query("DELETE FROM transactions WHERE feed_id = $1 AND user_id = $2")
            .bind(feed_id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for feed-linked transaction {}: {}", feed_id, e);
                FarmError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        Ok(rows)
    }

    /// Whole-ledger income and expense totals
    /// DOCUMENTATION: Used for GET /transactions/summary endpoint
    pub async fn totals(pool: &PgPool, user_id: Uuid) -> Result<(f64, f64), FarmError> {
        let row: (f64, f64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(amount) FILTER (WHERE entry_type = 'income'), 0)::float8,
                COALESCE(SUM(amount) FILTER (WHERE entry_type = 'expense'), 0)::float8
            FROM transactions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Totals query error: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok(row)
    }

    /// Per-month income/expense sums since the given cutoff
    /// DOCUMENTATION: Months with no entries are absent from the result;
    /// the service zero-fills the chart window
    pub async fn monthly_cashflow(
        pool: &PgPool,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<CashflowRow>, FarmError> {
        let rows = sqlx::query_as::<_, CashflowRow>(
            r#"
            SELECT
                date_trunc('month', occurred_on) AS month,
                COALESCE(SUM(amount) FILTER (WHERE entry_type = 'income'), 0)::float8 AS income,
                COALESCE(SUM(amount) FILTER (WHERE entry_type = 'expense'), 0)::float8 AS expense
            FROM transactions
            WHERE user_id = $1 AND occurred_on >= $2
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Cashflow query error: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?;

        Ok(rows)
    }
}
