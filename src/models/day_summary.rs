use crate::models::break_entry::BreakEntry;
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// Aggregate for one calendar day. `Default` is the empty day.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub total_work: i64,
    pub total_break: i64,
    pub first_clock_in: Option<DateTime<Local>>,
    pub last_clock_out: Option<DateTime<Local>>,
    pub breaks: Vec<BreakEntry>,
    pub work_percentage: u8,
    pub break_percentage: u8,
    pub entries: Vec<TimeEntry>,
}

impl DailySummary {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Seven daily summaries, Monday to Sunday.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    pub days: Vec<(NaiveDate, DailySummary)>,
    pub total_work: i64,
    pub total_break: i64,
}

/// Figures shown on the clock card: time worked today against the daily limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkStatus {
    pub worked_today: i64,
    /// Breaks so far today, including the one in progress after the last clock-out.
    pub break_today: i64,
    pub remaining: i64,
    pub overtime: i64,
    pub open_entry: Option<TimeEntry>,
}
