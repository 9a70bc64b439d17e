//! Break accounting: gaps between consecutive sessions of one day.

use crate::core::calculator::timeline::{entries_for_day, is_same_day};
use crate::models::break_entry::BreakEntry;
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, Local, NaiveDate};

/// Gaps between consecutive sorted entries where the earlier one is closed.
/// Gaps of zero or negative length are dropped.
pub fn collect_breaks(sorted: &[TimeEntry]) -> Vec<BreakEntry> {
    let mut breaks = Vec::new();

    for w in sorted.windows(2) {
        if let Some(out) = w[0].clock_out {
            let next_in = w[1].clock_in;
            if next_in > out {
                breaks.push(BreakEntry::between(out, next_in));
            }
        }
    }

    breaks
}

/// Total break time on `day`, in milliseconds.
///
/// Sums the gap after every closed entry up to the next entry's clock-in. When
/// the last session of the day is closed and `now` is on the same calendar
/// day as that clock-out, the break still in progress (`now - clock_out`) is
/// added as well. An open last session adds nothing.
pub fn total_break_for_day(entries: &[TimeEntry], day: NaiveDate, now: DateTime<Local>) -> i64 {
    let sorted = entries_for_day(entries, day);

    let mut total: i64 = sorted
        .windows(2)
        .filter_map(|w| w[0].clock_out.map(|out| (w[1].clock_in - out).num_milliseconds()))
        .sum();

    if let Some(last_out) = sorted.last().and_then(|e| e.clock_out)
        && is_same_day(last_out, now)
    {
        total += (now - last_out).num_milliseconds().max(0);
    }

    total
}
