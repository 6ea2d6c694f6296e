//! Message date parsing helpers
//!
//! Feed dates are operator-edited strings, so parsing is lenient:
//! RFC3339 first, then a naive datetime, then a bare date (midnight UTC).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a message `date` string.
///
/// Accepted formats, in order:
/// - RFC3339 (`2025-06-01T12:00:00Z`, with offset)
/// - Naive datetime (`2025-06-01T12:00:00`), assumed UTC
/// - Bare date (`2025-06-01`), midnight UTC
///
/// Returns `None` for anything else.
#[must_use]
pub fn parse_message_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}
