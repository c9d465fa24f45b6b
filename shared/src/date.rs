//! Date handling for review timestamps.
//!
//! The UI shows one date format everywhere: the long en-US style
//! (`January 15, 2025`). The API, on the other hand, reports creation
//! timestamps in ISO 8601 with or without an offset depending on which
//! backend revision served them, so conversion has to accept both.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Formats a date in the long en-US style used across the UI.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Today's date in display form, per the runtime clock.
pub fn today() -> String {
    long_date(Local::now().date_naive())
}

/// Converts an API creation timestamp into display form.
///
/// Accepts RFC 3339 (`2025-01-15T10:30:00+00:00`) and offset-less ISO 8601
/// (`2025-01-15T10:30:00.123456`). Anything else is returned verbatim, so a
/// value that is already in display form passes through untouched.
pub fn display_date(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return long_date(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return long_date(ts.date());
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn long_date_uses_unpadded_day() {
        assert_eq!(long_date(jan_15()), "January 15, 2025");
        let jan_5 = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(long_date(jan_5), "January 5, 2025");
    }

    #[test]
    fn display_date_converts_rfc3339() {
        assert_eq!(display_date("2025-01-15T10:30:00+00:00"), "January 15, 2025");
    }

    #[test]
    fn display_date_converts_offsetless_iso() {
        assert_eq!(display_date("2025-01-15T10:30:00.123456"), "January 15, 2025");
        assert_eq!(display_date("2025-01-15T10:30:00"), "January 15, 2025");
    }

    #[test]
    fn display_date_passes_display_values_through() {
        assert_eq!(display_date("January 15, 2025"), "January 15, 2025");
    }

    #[test]
    fn display_date_passes_garbage_through() {
        assert_eq!(display_date("not a date"), "not a date");
    }

    #[test]
    fn today_is_nonempty_display_form() {
        let today = today();
        assert!(today.contains(", "));
    }
}
