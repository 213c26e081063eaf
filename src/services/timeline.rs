// src/services/timeline.rs
// DOCUMENTATION: Month window arithmetic for the dashboard charts
// PURPOSE: Shared helpers for bucketing records into monthly series

use chrono::{Datelike, Months, NaiveDate};

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `n` months before the one containing `date`
pub fn months_back(date: NaiveDate, n: u32) -> NaiveDate {
    let start = month_start(date);
    start.checked_sub_months(Months::new(n)).unwrap_or(start)
}

/// Month starts for an `n`-month chart window, oldest first,
/// ending with the month containing `today`
pub fn window_starts(today: NaiveDate, n: u32) -> Vec<NaiveDate> {
    (0..n).rev().map(|i| months_back(today, i)).collect()
}

/// Short month label used on chart axes, e.g. "Mar"
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// True when both dates fall in the same calendar month
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(d(2025, 3, 17)), d(2025, 3, 1));
        assert_eq!(month_start(d(2025, 3, 1)), d(2025, 3, 1));
    }

    #[test]
    fn test_months_back_same_year() {
        assert_eq!(months_back(d(2025, 8, 15), 2), d(2025, 6, 1));
    }

    #[test]
    fn test_months_back_across_year_boundary() {
        assert_eq!(months_back(d(2025, 1, 20), 5), d(2024, 8, 1));
        assert_eq!(months_back(d(2025, 2, 28), 2), d(2024, 12, 1));
    }

    #[test]
    fn test_window_starts_order_and_length() {
        let starts = window_starts(d(2025, 8, 6), 6);

        assert_eq!(starts.len(), 6);
        assert_eq!(starts[0], d(2025, 3, 1));
        assert_eq!(starts[5], d(2025, 8, 1));

        // Strictly increasing
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_window_starts_spans_years() {
        let starts = window_starts(d(2025, 2, 10), 6);
        assert_eq!(starts[0], d(2024, 9, 1));
        assert_eq!(starts[5], d(2025, 2, 1));
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(d(2025, 1, 1)), "Jan");
        assert_eq!(month_label(d(2025, 12, 31)), "Dec");
    }

    #[test]
    fn test_same_month() {
        assert!(same_month(d(2025, 4, 1), d(2025, 4, 30)));
        assert!(!same_month(d(2025, 4, 1), d(2024, 4, 1)));
        assert!(!same_month(d(2025, 4, 1), d(2025, 5, 1)));
    }
}
