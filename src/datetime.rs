use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveTime, ParseError};

/// Render shape used by the storage UI for `uk-UA`: genitive month name,
/// unpadded day, `р.` year marker.
const DATE_FMT: &str = "%-d %B %Y р.";
const DATETIME_FMT: &str = "%-d %B %Y р. о %H:%M";

/// Format an RFC 3339 timestamp for Ukrainian users, date and time:
/// `"2026-08-23T14:05:00Z"` → `"23 серпня 2026 р. о 14:05"`.
///
/// Bare `YYYY-MM-DD` dates are accepted too and render at midnight. The
/// timestamp keeps whatever offset it carries; convert upstream if a
/// viewer-local zone is wanted.
pub fn localize_datetime(raw: &str) -> Result<String, ParseError> {
    let dt = parse(raw)?;
    Ok(dt.format_localized(DATETIME_FMT, Locale::uk_UA).to_string())
}

/// Date-only variant: `"2026-08-23T14:05:00Z"` → `"23 серпня 2026 р."`.
pub fn localize_date(raw: &str) -> Result<String, ParseError> {
    let dt = parse(raw)?;
    Ok(dt.format_localized(DATE_FMT, Locale::uk_UA).to_string())
}

fn parse(raw: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt),
        Err(err) => {
            // Record timestamps arrive as RFC 3339, but templates
            // occasionally hand over bare dates.
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| err)?;
            Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
        }
    }
}
