//! Totals over workout history.
//!
//! `total_stats` counts every record, with unreadable numbers contributing
//! zero. `weekly_stats` drops any record whose date cannot be read before
//! counting. Callers rely on both behaviours.

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::datetime::{parse_record_date, start_of_week};
use crate::core::duration::leading_number_or_zero;
use crate::core::WorkoutEntry;

/// Aggregate counters for a set of workouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTotals {
    /// Number of workouts.
    pub count: usize,
    /// Sum of durations in minutes.
    pub minutes: i64,
    /// Sum of calories in kcal.
    pub calories: i64,
}

impl WorkoutTotals {
    fn add<E: WorkoutEntry + ?Sized>(&mut self, entry: &E) {
        self.count += 1;
        self.minutes = self
            .minutes
            .saturating_add(leading_number_or_zero(entry.duration_text()));
        self.calories = self
            .calories
            .saturating_add(leading_number_or_zero(entry.calories_text()));
    }
}

/// Totals over every record.
#[must_use]
pub fn total_stats<E: WorkoutEntry>(records: &[E]) -> WorkoutTotals {
    records.iter().fold(WorkoutTotals::default(), |mut totals, r| {
        totals.add(r);
        totals
    })
}

/// Totals over records dated strictly after the start of the current week.
///
/// The week starts at midnight of the most recent `week_start` day at or
/// before `now`.
#[must_use]
pub fn weekly_stats<E: WorkoutEntry>(
    records: &[E],
    now: NaiveDateTime,
    week_start: Weekday,
) -> WorkoutTotals {
    let since = start_of_week(now, week_start);
    records
        .iter()
        .filter(|r| parse_record_date(r.date_text()).is_some_and(|at| at > since))
        .fold(WorkoutTotals::default(), |mut totals, r| {
            totals.add(r);
            totals
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct Entry {
        duration: &'static str,
        calories: &'static str,
        date: &'static str,
    }

    impl WorkoutEntry for Entry {
        fn duration_text(&self) -> &str {
            self.duration
        }
        fn calories_text(&self) -> &str {
            self.calories
        }
        fn date_text(&self) -> &str {
            self.date
        }
    }

    const fn entry(duration: &'static str, calories: &'static str, date: &'static str) -> Entry {
        Entry {
            duration,
            calories,
            date,
        }
    }

    fn thursday_afternoon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 6)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_total_stats_counts_unreadable_records() {
        let records = [
            entry("30 min", "120 kcal", "Mar 04, 2025 18:30"),
            entry("bad", "80 kcal", "Mar 05, 2025 07:00"),
        ];
        let totals = total_stats(&records);
        assert_eq!(
            totals,
            WorkoutTotals {
                count: 2,
                minutes: 30,
                calories: 200
            }
        );
    }

    #[test]
    fn test_total_stats_ignores_dates() {
        let records = [entry("10 min", "oops", "not a date")];
        let totals = total_stats(&records);
        assert_eq!(totals.count, 1);
        assert_eq!(totals.minutes, 10);
        assert_eq!(totals.calories, 0);
    }

    #[test]
    fn test_total_stats_empty() {
        let records: [Entry; 0] = [];
        assert_eq!(total_stats(&records), WorkoutTotals::default());
    }

    #[test]
    fn test_weekly_stats_filters_by_date() {
        let records = [
            // after Sunday Mar 02 00:00
            entry("30 min", "120 kcal", "Mar 04, 2025 18:30"),
            // last week
            entry("45 min", "300 kcal", "Feb 27, 2025 09:00"),
            // unparseable
            entry("20 min", "90 kcal", "2025-03-05 10:00"),
        ];
        let totals = weekly_stats(&records, thursday_afternoon(), Weekday::Sun);
        assert_eq!(
            totals,
            WorkoutTotals {
                count: 1,
                minutes: 30,
                calories: 120
            }
        );
    }

    #[test]
    fn test_weekly_stats_boundary_is_exclusive() {
        let records = [
            entry("30 min", "100 kcal", "Mar 02, 2025 00:00"),
            entry("15 min", "50 kcal", "Mar 02, 2025 00:01"),
        ];
        let totals = weekly_stats(&records, thursday_afternoon(), Weekday::Sun);
        assert_eq!(totals.count, 1);
        assert_eq!(totals.minutes, 15);
    }

    #[test]
    fn test_weekly_stats_respects_week_start() {
        let records = [entry("30 min", "100 kcal", "Mar 02, 2025 12:00")];
        // Sunday counts when weeks start on Sunday, not when they start Monday
        assert_eq!(
            weekly_stats(&records, thursday_afternoon(), Weekday::Sun).count,
            1
        );
        assert_eq!(
            weekly_stats(&records, thursday_afternoon(), Weekday::Mon).count,
            0
        );
    }

    #[test]
    fn test_weekly_stats_bad_numbers_still_count() {
        let records = [entry("?", "?", "Mar 05, 2025 10:00")];
        let totals = weekly_stats(&records, thursday_afternoon(), Weekday::Sun);
        assert_eq!(
            totals,
            WorkoutTotals {
                count: 1,
                minutes: 0,
                calories: 0
            }
        );
    }
}
