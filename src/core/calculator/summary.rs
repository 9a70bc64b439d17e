use crate::core::calculator::breaks::collect_breaks;
use crate::core::calculator::duration::entry_duration;
use crate::core::calculator::timeline::entries_for_day;
use crate::models::day_summary::{DailySummary, WeeklySummary};
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, Datelike, Days, Local, NaiveDate};

/// Share of `part` in `whole`, rounded half up and kept within 0..=100.
/// Zero when `whole` is not positive.
pub fn percentage(part: i64, whole: i64) -> u8 {
    if whole <= 0 {
        return 0;
    }
    let pct = (part as f64 / whole as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Summary of `day` as seen at `now`.
///
/// Closed entries add their duration to the work total. An open entry adds
/// `now - clock_in` (never below zero) only when `day` is the current day of
/// `now`; on any other day it adds nothing. Breaks are the positive gaps
/// between consecutive sessions; no trailing break is counted here.
///
/// The two percentages are rounded independently and may not add up to 100.
pub fn daily_summary(entries: &[TimeEntry], day: NaiveDate, now: DateTime<Local>) -> DailySummary {
    let sorted = entries_for_day(entries, day);
    if sorted.is_empty() {
        return DailySummary::default();
    }

    let is_today = now.date_naive() == day;

    let total_work: i64 = sorted
        .iter()
        .map(|e| {
            if e.is_open() {
                if is_today {
                    (now - e.clock_in).num_milliseconds().max(0)
                } else {
                    0
                }
            } else {
                entry_duration(e)
            }
        })
        .sum();

    let breaks = collect_breaks(&sorted);
    let total_break: i64 = breaks.iter().map(|b| b.duration_ms).sum();

    let first_clock_in = sorted.first().map(|e| e.clock_in);
    // positional: the last sorted entry that has a clock-out
    let last_clock_out = sorted.iter().rev().find_map(|e| e.clock_out);

    let total = total_work + total_break;

    DailySummary {
        total_work,
        total_break,
        first_clock_in,
        last_clock_out,
        breaks,
        work_percentage: percentage(total_work, total),
        break_percentage: percentage(total_break, total),
        entries: sorted,
    }
}

/// Monday of the ISO week containing `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    let back = u64::from(day.weekday().num_days_from_monday());
    day.checked_sub_days(Days::new(back)).unwrap_or(day)
}

/// Daily summaries for the seven days (Monday..Sunday) of the week containing
/// `day`, plus the week totals.
pub fn weekly_summary(entries: &[TimeEntry], day: NaiveDate, now: DateTime<Local>) -> WeeklySummary {
    let days: Vec<(NaiveDate, DailySummary)> = week_start(day)
        .iter_days()
        .take(7)
        .map(|d| (d, daily_summary(entries, d, now)))
        .collect();

    let total_work = days.iter().map(|(_, s)| s.total_work).sum();
    let total_break = days.iter().map(|(_, s)| s.total_break).sum();

    WeeklySummary {
        days,
        total_work,
        total_break,
    }
}
