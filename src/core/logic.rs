use crate::core::calculator::{breaks, limits, summary, timeline, work};
use crate::models::day_summary::{DailySummary, WeeklySummary, WorkStatus};
use crate::models::time_entry::TimeEntry;
use crate::utils::clock::Clock;
use chrono::NaiveDate;

/// Outermost layer of the engine: the only place where the clock is read.
pub struct Core;

impl Core {
    pub fn build_daily_summary(
        entries: &[TimeEntry],
        day: NaiveDate,
        clock: &impl Clock,
    ) -> DailySummary {
        summary::daily_summary(entries, day, clock.now())
    }

    pub fn build_weekly_summary(
        entries: &[TimeEntry],
        day: NaiveDate,
        clock: &impl Clock,
    ) -> WeeklySummary {
        summary::weekly_summary(entries, day, clock.now())
    }

    /// Today's worked and break time, and the worked time against the daily limit.
    pub fn work_status(entries: &[TimeEntry], limit_hours: f64, clock: &impl Clock) -> WorkStatus {
        let now = clock.now();
        let today = now.date_naive();
        let worked_today = work::total_work_for_day(entries, today, now);

        WorkStatus {
            worked_today,
            break_today: breaks::total_break_for_day(entries, today, now),
            remaining: limits::remaining_ms(limit_hours, worked_today),
            overtime: limits::overtime_ms(limit_hours, worked_today),
            open_entry: entries.iter().find(|e| e.is_open()).cloned(),
        }
    }

    /// Entries of one day, oldest first (the history table).
    pub fn history(entries: &[TimeEntry], day: NaiveDate) -> Vec<TimeEntry> {
        timeline::entries_for_day(entries, day)
    }
}
