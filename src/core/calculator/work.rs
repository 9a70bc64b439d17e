use crate::core::calculator::timeline::{end_of_day, entries_for_day};
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, Local, NaiveDate};

/// Time worked on `day` up to `now`, in milliseconds.
///
/// Each entry charged to `day` contributes `min(now, clock_out) - clock_in`.
/// An open entry runs until `now`, clamped to the end of `day` when `day` is
/// not the current day. Entries that start after `now` contribute nothing.
pub fn total_work_for_day(entries: &[TimeEntry], day: NaiveDate, now: DateTime<Local>) -> i64 {
    let open_until = if now.date_naive() == day {
        now
    } else {
        end_of_day(day).map_or(now, |eod| eod.min(now))
    };

    entries_for_day(entries, day)
        .iter()
        .map(|e| {
            let end = match e.clock_out {
                Some(out) => out.min(now),
                None => open_until,
            };
            (end - e.clock_in).num_milliseconds().max(0)
        })
        .sum()
}
