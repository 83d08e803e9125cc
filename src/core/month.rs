use crate::domain::model::MonthRange;
use chrono::{Datelike, NaiveDate};

/// Calendar month containing `today`. The last day is the day before the
/// first day of the following month, wrapping the year at December.
pub fn current_month(today: NaiveDate) -> MonthRange {
    let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
        .expect("day 1 exists in every month");

    let (next_year, next_month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };

    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("day 1 exists in every month")
        .pred_opt()
        .expect("first of a month has a predecessor");

    MonthRange { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_every_month_ends_before_next_first() {
        for month in 1..=12 {
            let range = current_month(day(2025, month, 15));
            assert_eq!(range.start, day(2025, month, 1));

            let next_first = if month == 12 {
                day(2026, 1, 1)
            } else {
                day(2025, month + 1, 1)
            };
            assert_eq!(range.end.succ_opt().unwrap(), next_first);
        }
    }

    #[test]
    fn test_december_wraps_year() {
        let range = current_month(day(2025, 12, 31));
        assert_eq!(range.start_str(), "2025-12-01");
        assert_eq!(range.end_str(), "2025-12-31");
    }

    #[test]
    fn test_february_leap_year() {
        let range = current_month(day(2024, 2, 10));
        assert_eq!(range.end_str(), "2024-02-29");
    }

    #[test]
    fn test_february_non_leap_year() {
        let range = current_month(day(2023, 2, 10));
        assert_eq!(range.end_str(), "2023-02-28");
    }

    #[test]
    fn test_first_and_last_day_inputs() {
        assert_eq!(current_month(day(2025, 6, 1)), current_month(day(2025, 6, 30)));
    }
}
