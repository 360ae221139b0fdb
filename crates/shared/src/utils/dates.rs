//! Date parsing for user supplied values and the calendar string rendering used
//! in responses. Everything is interpreted in UTC

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// `Mon Jan 01 2024`
pub const CALENDAR_FORMAT: &str = "%a %b %d %Y";

const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn calendar_string(date: &DateTime<Utc>) -> String {
    date.format(CALENDAR_FORMAT).to_string()
}

/// Parses a user supplied date. Returns `None` for empty or unrecognised input
///
/// Bare dates resolve to midnight UTC
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(input) {
        return Some(date_time.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return start_of_day(date);
    }

    if let Some(date_time) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return Some(date_time.and_utc());
    }

    NaiveDate::parse_from_str(input, CALENDAR_FORMAT)
        .ok()
        .and_then(start_of_day)
}

fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|v| v.and_utc())
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_plain_date_is_midnight_utc() {
        assert_eq!(
            parse_date("2024-01-05"),
            Some(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_rfc3339_is_converted_to_utc() {
        assert_eq!(
            parse_date("2024-01-05T10:00:00+02:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_naive_date_times() {
        let expected = Some(Utc.with_ymd_and_hms(2024, 3, 9, 17, 45, 12).unwrap());
        assert_eq!(parse_date("2024-03-09T17:45:12"), expected);
        assert_eq!(parse_date("2024-03-09 17:45:12"), expected);
    }

    #[test]
    fn test_calendar_string_parses_back() {
        let date = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let rendered = calendar_string(&date);
        assert_eq!(rendered, "Wed Jan 31 2024");
        assert_eq!(parse_date(&rendered), Some(date));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            parse_date("  2024-01-05 "),
            Some(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }
}
