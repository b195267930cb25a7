//! Calendar-day helpers
//!
//! Waste logs are bucketed by calendar day. Days are persisted as "YYYY-MM-DD"
//! strings (chrono's serde format for `NaiveDate`).

use chrono::{Local, NaiveDate, Utc};

pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Format a day as "YYYY-MM-DD".
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use ecotrack::stats::day_bucket;
///
/// let day = NaiveDate::from_ymd_opt(2023, 12, 28).unwrap();
/// assert_eq!(day_bucket(day), "2023-12-28");
/// ```
pub fn day_bucket(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Parse a "YYYY-MM-DD" day bucket
pub fn parse_day_bucket(bucket: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(bucket.trim(), DAY_FORMAT).ok()
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}

/// Current time in milliseconds since the Unix epoch
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
