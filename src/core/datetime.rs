//! Timestamp handling for workout history.
//!
//! History dates are stored as display strings like `"Mar 04, 2025 18:30"`
//! rather than structured values, so filtering by week has to parse them.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};

/// Format of the `date` column of a history record.
pub const RECORD_DATE_FORMAT: &str = "%b %d, %Y %H:%M";

/// Render a timestamp in [`RECORD_DATE_FORMAT`].
#[must_use]
pub fn format_record_date(at: NaiveDateTime) -> String {
    at.format(RECORD_DATE_FORMAT).to_string()
}

/// Parse a history date string.
///
/// Returns `None` if the text does not match [`RECORD_DATE_FORMAT`].
#[must_use]
pub fn parse_record_date(text: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(text.trim(), RECORD_DATE_FORMAT) {
        Ok(at) => Some(at),
        Err(e) => {
            log::debug!("unreadable record date {text:?}: {e}");
            None
        }
    }
}

/// Midnight of the most recent `first_day` at or before `now`.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use gymtrack::core::datetime::start_of_week;
///
/// // Thursday 2025-03-06
/// let now = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap().and_hms_opt(15, 0, 0).unwrap();
/// let start = start_of_week(now, Weekday::Sun);
/// assert_eq!(start.to_string(), "2025-03-02 00:00:00");
/// ```
#[must_use]
pub fn start_of_week(now: NaiveDateTime, first_day: Weekday) -> NaiveDateTime {
    let today = now.weekday().num_days_from_monday();
    let first = first_day.num_days_from_monday();
    let days_back = (today + 7 - first) % 7;
    let date = now.date() - Duration::days(i64::from(days_back));
    // NaiveTime::default() is midnight
    date.and_time(NaiveTime::default())
}
