//! Day selection shared by every per-day calculation.
//!
//! An entry belongs to the accounting day of its `clock_in`, whatever day its
//! `clock_out` falls on: an overnight session is charged entirely to the day
//! it started.

use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use tracing::warn;

/// Entries whose clock-in falls on `day`, sorted ascending by clock-in.
/// Entries with identical clock-in keep their input order.
pub fn entries_for_day(entries: &[TimeEntry], day: NaiveDate) -> Vec<TimeEntry> {
    let mut selected: Vec<TimeEntry> = entries
        .iter()
        .filter(|e| e.clock_in.date_naive() == day)
        .cloned()
        .collect();

    selected.sort_by_key(|e| e.clock_in);

    let open = selected.iter().filter(|e| e.is_open()).count();
    if open > 1 {
        warn!(%day, open, "more than one open entry on the same day");
    }

    selected
}

pub fn is_same_day(a: DateTime<Local>, b: DateTime<Local>) -> bool {
    a.date_naive() == b.date_naive()
}

/// First instant of the day after `day`, in local time.
///
/// Returns `None` only when local midnight does not exist at all (a DST jump
/// exactly at 00:00 with no earlier mapping).
pub fn end_of_day(day: NaiveDate) -> Option<DateTime<Local>> {
    let next = day.succ_opt()?;
    Local
        .from_local_datetime(&next.and_time(NaiveTime::MIN))
        .earliest()
}
