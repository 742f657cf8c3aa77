use chrono::{DateTime, FixedOffset, NaiveDate};

/// Offset form used by the tracker for issue fields, e.g. `2024-01-15T10:23:45.123+0000`.
const COMPACT_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a timestamp the way the tracker emits it.
///
/// Accepts RFC 3339, the compact `+hhmm` offset form and bare dates (taken as
/// midnight UTC). Returns `None` for anything else, so callers can treat an
/// unreadable value as "not after" instead of failing.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime);
    }
    if let Ok(datetime) = DateTime::parse_from_str(value, COMPACT_OFFSET_FORMAT) {
        return Some(datetime);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
#[path = "datetime_tests.rs"]
mod tests;
