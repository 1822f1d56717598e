//! Combined all-time and weekly totals.

use chrono::Weekday;
use serde::Serialize;

use super::aggregate::{total_stats, weekly_stats, WorkoutTotals};
use crate::core::{format_record_date, start_of_week, Clock, WorkoutEntry};

/// Stats for one user at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    /// Totals over all history.
    pub total: WorkoutTotals,
    /// Totals since the start of the week.
    pub week: WorkoutTotals,
    /// Start of the week, in history date format.
    pub week_start: String,
}

impl StatsReport {
    /// Build a report using `clock` for "now".
    #[must_use]
    pub fn build<E: WorkoutEntry>(records: &[E], clock: &dyn Clock, week_start: Weekday) -> Self {
        let now = clock.now();
        Self {
            total: total_stats(records),
            week: weekly_stats(records, now, week_start),
            week_start: format_record_date(start_of_week(now, week_start)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MockClock;
    use chrono::NaiveDate;

    struct Done(&'static str);

    impl WorkoutEntry for Done {
        fn duration_text(&self) -> &str {
            "20 min"
        }
        fn calories_text(&self) -> &str {
            "100 kcal"
        }
        fn date_text(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_report_uses_clock() {
        let mut clock = MockClock::new();
        clock.expect_now().times(1).returning(|| {
            NaiveDate::from_ymd_opt(2025, 3, 10)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        });

        let records = [Done("Mar 10, 2025 07:00"), Done("Mar 08, 2025 07:00")];
        let report = StatsReport::build(&records, &clock, Weekday::Mon);

        assert_eq!(report.total.count, 2);
        assert_eq!(report.total.minutes, 40);
        assert_eq!(report.week.count, 1);
        assert_eq!(report.week.calories, 100);
        assert_eq!(report.week_start, "Mar 10, 2025 00:00");
    }
}
