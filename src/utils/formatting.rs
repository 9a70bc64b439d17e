//! Formatting utilities used for CLI and export outputs.

use chrono::{DateTime, Local};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Renders milliseconds as `HH:MM:SS`. Negative input renders as zero.
/// Hours are not wrapped at 24.
pub fn format_duration(ms: i64) -> String {
    let secs = ms.max(0) / 1000;
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Same as [`format_duration`] for a floating point value; NaN, infinite and
/// negative values render as zero.
pub fn format_duration_f64(ms: f64) -> String {
    if !ms.is_finite() || ms < 0.0 {
        return format_duration(0);
    }
    format_duration(ms.trunc() as i64)
}

/// e.g. `09:05:00 AM`
pub fn format_time(instant: &DateTime<Local>) -> String {
    instant.format("%I:%M:%S %p").to_string()
}

/// e.g. `September 1, 2025`
pub fn format_date(instant: &DateTime<Local>) -> String {
    instant.format("%B %-d, %Y").to_string()
}

/// e.g. `Sep 1, 2025, 9:05 AM`
pub fn format_date_time(instant: &DateTime<Local>) -> String {
    instant.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// `HH:MM:SS` with a leading sign, for figures that may go negative
/// (remaining time).
pub fn format_signed_duration(ms: i64) -> String {
    if ms < 0 {
        format!("-{}", format_duration(-ms))
    } else {
        format_duration(ms)
    }
}

/// e.g. `September 1, 2025`, for a bare calendar day
pub fn format_day(day: &chrono::NaiveDate) -> String {
    day.format("%B %-d, %Y").to_string()
}
