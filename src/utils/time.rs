//! Time utilities: parsing the instants given on the command line.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(t, f).ok())
}

fn local_from_naive(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest()
}

/// Parse an instant given as RFC 3339, `YYYY-MM-DD HH:MM[:SS]`,
/// `YYYY-MM-DDTHH:MM[:SS]` or a bare `HH:MM[:SS]` on `today`.
pub fn parse_instant(s: &str, today: NaiveDate) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    if let Some(naive) = DATE_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return local_from_naive(naive);
    }

    parse_time(s).and_then(|t| local_from_naive(today.and_time(t)))
}

pub fn parse_optional_instant(
    input: Option<&String>,
    today: NaiveDate,
) -> AppResult<Option<DateTime<Local>>> {
    if let Some(s) = input {
        let t = parse_instant(s, today).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parse a timestamp read back from storage (RFC 3339).
pub fn parse_stored(s: &str) -> AppResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}
