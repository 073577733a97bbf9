//! Date parsing and ordering for item sorting.
//!
//! Item dates arrive as ISO-ish strings. They are parsed once per filter pass into
//! millisecond timestamps; anything unparseable becomes `None` and is ordered
//! after every valid date regardless of direction, so a malformed item degrades
//! only its own position.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

use crate::domain::SortOrder;

/// Date-time layouts without an offset, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parses an item date into milliseconds since the Unix epoch.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS[.fff]]`, `YYYY-MM-DD HH:MM:SS` and
/// bare `YYYY-MM-DD` (midnight UTC).
///
/// # Examples
///
/// ```
/// use events_filter::engine::dates::parse_timestamp;
///
/// assert_eq!(parse_timestamp("1970-01-02"), Some(86_400_000));
/// assert_eq!(parse_timestamp("1970-01-01T00:00:01Z"), Some(1_000));
/// assert_eq!(parse_timestamp("soon"), None);
/// ```
#[must_use]
pub fn parse_timestamp(date: &str) -> Option<i64> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Orders two parsed timestamps for the given direction.
///
/// Invalid (`None`) timestamps compare greater than any valid one in both
/// directions and equal to each other.
#[must_use]
pub fn compare_timestamps(a: Option<i64>, b: Option<i64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::DateAsc => a.cmp(&b),
            SortOrder::DateDesc => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only_is_utc_midnight() {
        let jan = parse_timestamp("2024-01-01").unwrap();
        let feb = parse_timestamp("2024-02-01").unwrap();
        assert_eq!(feb - jan, 31 * 86_400_000);
    }

    #[test]
    fn test_parse_offsets_and_naive_times() {
        let utc = parse_timestamp("2024-03-10T10:00:00Z").unwrap();
        let tokyo = parse_timestamp("2024-03-10T19:00:00+09:00").unwrap();
        assert_eq!(utc, tokyo);
        assert_eq!(parse_timestamp("2024-03-10T10:00:00"), Some(utc));
        assert_eq!(parse_timestamp("2024-03-10T10:00"), Some(utc));
        assert_eq!(parse_timestamp("2024-03-10 10:00:00"), Some(utc));
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
        assert_eq!(parse_timestamp("next tuesday"), None);
    }

    #[test]
    fn test_invalid_sorts_last_in_both_directions() {
        for order in [SortOrder::DateAsc, SortOrder::DateDesc] {
            assert_eq!(compare_timestamps(Some(1), None, order), Ordering::Less);
            assert_eq!(compare_timestamps(None, Some(1), order), Ordering::Greater);
            assert_eq!(compare_timestamps(None, None, order), Ordering::Equal);
        }
    }

    #[test]
    fn test_direction() {
        assert_eq!(compare_timestamps(Some(1), Some(2), SortOrder::DateAsc), Ordering::Less);
        assert_eq!(compare_timestamps(Some(1), Some(2), SortOrder::DateDesc), Ordering::Greater);
    }
}
