use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The `--date` argument, or `today` when absent.
pub fn resolve_day(arg: Option<&String>, today: NaiveDate) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today),
    }
}

pub fn weekday_short(d: NaiveDate) -> String {
    d.format("%a").to_string()
}
