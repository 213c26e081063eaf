// src/services/egg_service.rs
// DOCUMENTATION: Business logic for egg records
// PURPOSE: Record keeping plus the monthly aggregation behind the dashboard chart

use crate::db::{BatchRepository, EggRepository};
use crate::errors::FarmError;
use crate::models::{CreateEggRequest, Egg, EggResponse, MonthlyEggStats};
use crate::services::timeline;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Number of months shown on the production chart
pub const STATS_MONTHS: u32 = 6;

pub struct EggService;

impl EggService {
    /// Record a day's egg numbers
    /// DOCUMENTATION: The batch must exist and belong to the caller
    pub async fn record_egg(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateEggRequest,
    ) -> Result<EggResponse, FarmError> {
        let _ = BatchRepository::get_by_id(pool, user_id, req.batch_id).await?;

        let laid_on = req.laid_on.unwrap_or_else(|| Utc::now().date_naive());
        let egg = EggRepository::create_egg(pool, user_id, laid_on, &req).await?;
        Ok(egg.to_response())
    }

    /// List egg records, optionally scoped to a batch
    pub async fn list_eggs(
        pool: &PgPool,
        user_id: Uuid,
        batch_id: Option<Uuid>,
    ) -> Result<Vec<EggResponse>, FarmError> {
        let eggs = EggRepository::list(pool, user_id, batch_id).await?;
        Ok(eggs.iter().map(|e| e.to_response()).collect())
    }

    /// Delete an egg record
    pub async fn delete_egg(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), FarmError> {
        EggRepository::delete_egg(pool, user_id, id).await
    }

    /// Six-month production series for the dashboard chart
    pub async fn monthly_stats(
        pool: &PgPool,
        user_id: Uuid,
        batch_id: Option<Uuid>,
    ) -> Result<Vec<MonthlyEggStats>, FarmError> {
        let today = Utc::now().date_naive();
        let since = timeline::months_back(today, STATS_MONTHS - 1);
        let rows = EggRepository::list_since(pool, user_id, batch_id, since).await?;
        Ok(Self::monthly_series(today, &rows))
    }

    /// Bucket fetched records into the chart window
    /// DOCUMENTATION: Always yields exactly STATS_MONTHS buckets, oldest
    /// first and ending with the current month; empty months are zeros
    pub fn monthly_series(today: NaiveDate, rows: &[Egg]) -> Vec<MonthlyEggStats> {
        timeline::window_starts(today, STATS_MONTHS)
            .into_iter()
            .map(|start| {
                let mut stats = MonthlyEggStats {
                    month: timeline::month_label(start),
                    collected: 0,
                    sold: 0,
                    spoiled: 0,
                };

                for row in rows.iter().filter(|r| timeline::same_month(r.laid_on, start)) {
                    stats.collected += row.collected as i64;
                    stats.sold += row.sold as i64;
                    stats.spoiled += row.spoiled as i64;
                }

                stats
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn egg(laid_on: NaiveDate, collected: i32, sold: i32, spoiled: i32) -> Egg {
        Egg {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            batch_id: Uuid::new_v4(),
            laid_on,
            collected,
            sold,
            spoiled,
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    #[test]
    fn test_series_has_six_zero_filled_buckets() {
        let series = EggService::monthly_series(d(2025, 8, 6), &[]);

        assert_eq!(series.len(), 6);
        assert_eq!(series[0].month, "Mar");
        assert_eq!(series[5].month, "Aug");
        assert!(series.iter().all(|m| m.collected == 0 && m.sold == 0 && m.spoiled == 0));
    }

    #[test]
    fn test_series_sums_rows_within_a_month() {
        let rows = vec![
            egg(d(2025, 8, 1), 30, 24, 1),
            egg(d(2025, 8, 2), 28, 0, 2),
            egg(d(2025, 7, 15), 25, 20, 0),
        ];

        let series = EggService::monthly_series(d(2025, 8, 6), &rows);

        let august = &series[5];
        assert_eq!(august.month, "Aug");
        assert_eq!(august.collected, 58);
        assert_eq!(august.sold, 24);
        assert_eq!(august.spoiled, 3);

        let july = &series[4];
        assert_eq!(july.collected, 25);
        assert_eq!(july.sold, 20);
    }

    #[test]
    fn test_series_ignores_rows_outside_window() {
        let rows = vec![egg(d(2024, 12, 31), 99, 99, 99)];
        let series = EggService::monthly_series(d(2025, 8, 6), &rows);

        assert!(series.iter().all(|m| m.collected == 0));
    }

    #[test]
    fn test_series_crosses_year_boundary() {
        let rows = vec![egg(d(2024, 11, 20), 10, 5, 0)];
        let series = EggService::monthly_series(d(2025, 2, 10), &rows);

        assert_eq!(series[0].month, "Sep");
        let november = series.iter().find(|m| m.month == "Nov").unwrap();
        assert_eq!(november.collected, 10);
        assert_eq!(november.sold, 5);
    }
}
