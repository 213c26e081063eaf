// src/services/ledger_service.rs
// DOCUMENTATION: Business logic for the financial ledger
// PURPOSE: Manual entries, pagination, and the finance page aggregates

use crate::db::{CashflowRow, TransactionRepository};
use crate::errors::FarmError;
use crate::models::{
    CreateTransactionRequest, LedgerQuery, LedgerSummary, MonthlyCashflow,
    TransactionListResponse, TransactionResponse,
};
use crate::services::timeline;
use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Number of months shown on the cashflow chart
pub const CASHFLOW_MONTHS: u32 = 6;

pub struct LedgerService;

impl LedgerService {
    /// Record a manual ledger entry
    /// DOCUMENTATION: Manual entries never carry a feed link; those are
    /// created only by the feed service
    pub async fn add_entry(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateTransactionRequest,
    ) -> Result<TransactionResponse, FarmError> {
        let occurred_on = req.date.unwrap_or_else(Utc::now);
        let transaction = TransactionRepository::create_transaction(
            pool,
            user_id,
            &req.entry_type,
            &req.category,
            req.amount,
            &req.description,
            None,
            occurred_on,
        )
        .await?;

        Ok(transaction.to_response())
    }

    /// Paginated ledger listing, newest first
    pub async fn list_entries(
        pool: &PgPool,
        user_id: Uuid,
        query: LedgerQuery,
    ) -> Result<TransactionListResponse, FarmError> {
        let limit = query.limit.unwrap_or(20).clamp(1, 100);
        let page = query.page.unwrap_or(1).max(1);
        let offset = (page - 1) * limit;

        let (transactions, total_count) =
            TransactionRepository::list(pool, user_id, limit, offset).await?;

        Ok(TransactionListResponse {
            data: transactions.iter().map(|t| t.to_response()).collect(),
            total_count,
            page,
            limit,
            has_more: total_count > page * limit,
        })
    }

    /// Delete a ledger entry
    pub async fn delete_entry(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), FarmError> {
        TransactionRepository::delete_transaction(pool, user_id, id).await
    }

    /// Whole-ledger totals for the finance summary cards
    pub async fn summary(pool: &PgPool, user_id: Uuid) -> Result<LedgerSummary, FarmError> {
        let (total_income, total_expense) = TransactionRepository::totals(pool, user_id).await?;
        Ok(LedgerSummary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        })
    }

    /// Six-month cashflow series for the finance chart
    pub async fn monthly_stats(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<MonthlyCashflow>, FarmError> {
        let today = Utc::now().date_naive();
        let since = timeline::months_back(today, CASHFLOW_MONTHS - 1)
            .and_time(NaiveTime::MIN)
            .and_utc();

        let rows = TransactionRepository::monthly_cashflow(pool, user_id, since).await?;
        Ok(Self::cashflow_series(today, &rows))
    }

    /// Zero-fill the aggregate rows into the chart window
    /// DOCUMENTATION: Always yields exactly CASHFLOW_MONTHS buckets, oldest
    /// first and ending with the current month
    pub fn cashflow_series(today: NaiveDate, rows: &[CashflowRow]) -> Vec<MonthlyCashflow> {
        timeline::window_starts(today, CASHFLOW_MONTHS)
            .into_iter()
            .map(|start| {
                let bucket = rows
                    .iter()
                    .find(|r| timeline::same_month(r.month.date_naive(), start));

                MonthlyCashflow {
                    month: timeline::month_label(start),
                    income: bucket.map(|r| r.income).unwrap_or(0.0),
                    expense: bucket.map(|r| r.expense).unwrap_or(0.0),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn row(y: i32, m: u32, income: f64, expense: f64) -> CashflowRow {
        CashflowRow {
            month: Utc.with_ymd_and_hms(y, m, 1, 0, 0, 0).unwrap(),
            income,
            expense,
        }
    }

    #[test]
    fn test_cashflow_series_zero_fills_missing_months() {
        let series = LedgerService::cashflow_series(d(2025, 8, 6), &[]);

        assert_eq!(series.len(), 6);
        assert_eq!(series[0].month, "Mar");
        assert_eq!(series[5].month, "Aug");
        assert!(series.iter().all(|m| m.income == 0.0 && m.expense == 0.0));
    }

    #[test]
    fn test_cashflow_series_places_rows_in_their_month() {
        let rows = vec![row(2025, 7, 12000.0, 5000.0), row(2025, 8, 0.0, 750.0)];
        let series = LedgerService::cashflow_series(d(2025, 8, 6), &rows);

        assert_eq!(series[4].month, "Jul");
        assert_eq!(series[4].income, 12000.0);
        assert_eq!(series[4].expense, 5000.0);
        assert_eq!(series[5].expense, 750.0);
    }

    #[test]
    fn test_cashflow_series_spans_years() {
        let rows = vec![row(2024, 12, 900.0, 0.0)];
        let series = LedgerService::cashflow_series(d(2025, 3, 15), &rows);

        let december = series.iter().find(|m| m.month == "Dec").unwrap();
        assert_eq!(december.income, 900.0);
    }
}
