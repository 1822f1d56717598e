//! Duration text parsing and `MM:SS` formatting.
//!
//! Durations are entered as free text by convention `"<minutes> min"`, and
//! calories as `"<kcal> kcal"`. Only the first whitespace-separated token is
//! read. Parsing never fails: each caller picks its own fallback.

/// Minutes used when a duration cannot be read for the session timer.
pub const FALLBACK_MINUTES: i64 = 1;

/// Read the leading integer of a `"<n> <unit>"` string.
///
/// Returns `None` when the text is empty or its first token is not an integer.
#[must_use]
pub fn parse_leading_number(text: &str) -> Option<i64> {
    text.split_whitespace().next()?.parse().ok()
}

/// Read the leading integer, substituting `0` when it cannot be parsed.
///
/// This is the convention used when summing history records.
#[must_use]
pub fn leading_number_or_zero(text: &str) -> i64 {
    parse_leading_number(text).unwrap_or_else(|| {
        log::debug!("unreadable number {text:?}, counting as 0");
        0
    })
}

/// Parse a duration string into whole minutes.
///
/// Falls back to [`FALLBACK_MINUTES`] when the text cannot be read.
///
/// # Examples
///
/// ```
/// use gymtrack::core::duration::parse_minutes;
///
/// assert_eq!(parse_minutes("30 min"), 30);
/// assert_eq!(parse_minutes("garbage"), 1);
/// ```
#[must_use]
pub fn parse_minutes(text: &str) -> i64 {
    parse_leading_number(text).unwrap_or_else(|| {
        log::debug!("unreadable duration {text:?}, using {FALLBACK_MINUTES} min");
        FALLBACK_MINUTES
    })
}

/// Parse a duration string into seconds.
#[must_use]
pub fn to_seconds(text: &str) -> i64 {
    parse_minutes(text).saturating_mul(60)
}

/// Format seconds as zero-padded `MM:SS`.
///
/// Minutes are not wrapped at the hour, so `3600` renders as `60:00`.
/// Negative input renders as `00:00`.
#[must_use]
pub fn format_seconds(total_seconds: i64) -> String {
    let secs = total_seconds.max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
