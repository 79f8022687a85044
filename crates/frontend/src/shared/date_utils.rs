//! Date and time formatting for timelines, messages and notifications.
//!
//! Fixture timestamps are ISO-8601 without offset (`2023-12-15T10:30:00`),
//! optionally with a trailing `Z`. Anything unparseable is shown as is.

use chrono::{NaiveDate, NaiveDateTime, Utc};

const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim().trim_end_matches('Z');
    let value = value.split('.').next().unwrap_or(value);
    NaiveDateTime::parse_from_str(value, ISO_DATETIME).ok()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// "2023-12-15" or "2023-12-15T10:30:00" -> "Dec 15, 2023"
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "2023-12-15T14:05:00" -> "Dec 15, 2023 2:05 PM"
pub fn format_datetime(value: &str) -> String {
    parse_datetime(value)
        .map(|dt| dt.format("%b %-d, %Y %-I:%M %p").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "2023-12-15T14:05:00" -> "2:05 PM"
pub fn format_time(value: &str) -> String {
    parse_datetime(value)
        .map(|dt| dt.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "5 minutes ago" style distance from `now`; older than a month falls back to the date.
pub fn relative_time_from(value: &str, now: NaiveDateTime) -> String {
    let Some(dt) = parse_datetime(value) else {
        return value.to_string();
    };
    let minutes = now.signed_duration_since(dt).num_minutes();

    match minutes {
        m if m < 1 => "just now".to_string(),
        1 => "1 minute ago".to_string(),
        m if m < 60 => format!("{m} minutes ago"),
        m if m < 120 => "1 hour ago".to_string(),
        m if m < 60 * 24 => format!("{} hours ago", m / 60),
        m if m < 60 * 48 => "yesterday".to_string(),
        m if m < 60 * 24 * 30 => format!("{} days ago", m / (60 * 24)),
        _ => format_date(value),
    }
}

pub fn relative_time(value: &str) -> String {
    relative_time_from(value, Utc::now().naive_utc())
}

/// Timestamp for locally created records (chat messages), same shape as fixtures.
pub fn now_timestamp() -> String {
    Utc::now().naive_utc().format(ISO_DATETIME).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> NaiveDateTime {
        parse_datetime(value).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2023-12-05"), "Dec 5, 2023");
        assert_eq!(format_date("2023-12-15T10:30:00"), "Dec 15, 2023");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2023-12-15T14:05:00"), "Dec 15, 2023 2:05 PM");
        assert_eq!(format_datetime("2023-12-15T09:00:00Z"), "Dec 15, 2023 9:00 AM");
        assert_eq!(format_time("2023-12-15T00:30:00.123Z"), "12:30 AM");
    }

    #[test]
    fn test_relative_time() {
        let now = at("2023-12-15T12:00:00");
        assert_eq!(relative_time_from("2023-12-15T11:59:40", now), "just now");
        assert_eq!(relative_time_from("2023-12-15T11:45:00", now), "15 minutes ago");
        assert_eq!(relative_time_from("2023-12-15T09:00:00", now), "3 hours ago");
        assert_eq!(relative_time_from("2023-12-14T09:00:00", now), "yesterday");
        assert_eq!(relative_time_from("2023-12-10T12:00:00", now), "5 days ago");
        assert_eq!(relative_time_from("2023-10-01T12:00:00", now), "Oct 1, 2023");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(relative_time("soon"), "soon");
    }

    #[test]
    fn test_now_timestamp_parses_back() {
        assert!(parse_datetime(&now_timestamp()).is_some());
    }
}
