//! Flat, serializable views of a daily summary for the export writers.

use crate::core::calculator::duration::entry_duration;
use crate::models::break_entry::BreakEntry;
use crate::models::day_summary::DailySummary;
use crate::models::time_entry::TimeEntry;
use crate::utils::formatting::{format_date_time, format_duration, format_time};
use chrono::NaiveDate;
use serde::Serialize;

/// One row per entry (CSV / JSON / PDF).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub id: String,
    pub clock_in: String,
    pub clock_out: String,
    pub duration: String,
    pub duration_ms: i64,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id.clone(),
            clock_in: e.clock_in.to_rfc3339(),
            clock_out: e.clock_out.map(|t| t.to_rfc3339()).unwrap_or_default(),
            duration: format_duration(entry_duration(e)),
            duration_ms: entry_duration(e),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BreakExport {
    pub start: String,
    pub end: String,
    pub duration: String,
    pub duration_ms: i64,
}

impl From<&BreakEntry> for BreakExport {
    fn from(b: &BreakEntry) -> Self {
        Self {
            start: b.start.to_rfc3339(),
            end: b.end.to_rfc3339(),
            duration: format_duration(b.duration_ms),
            duration_ms: b.duration_ms,
        }
    }
}

/// The whole report of one day (JSON).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DailyReport {
    pub date: String,
    pub total_work: String,
    pub total_work_ms: i64,
    pub total_break: String,
    pub total_break_ms: i64,
    pub first_clock_in: Option<String>,
    pub last_clock_out: Option<String>,
    pub work_percentage: u8,
    pub break_percentage: u8,
    pub breaks: Vec<BreakExport>,
    pub entries: Vec<EntryExport>,
}

impl DailyReport {
    pub fn new(day: NaiveDate, summary: &DailySummary) -> Self {
        Self {
            date: day.format("%Y-%m-%d").to_string(),
            total_work: format_duration(summary.total_work),
            total_work_ms: summary.total_work,
            total_break: format_duration(summary.total_break),
            total_break_ms: summary.total_break,
            first_clock_in: summary.first_clock_in.map(|t| t.to_rfc3339()),
            last_clock_out: summary.last_clock_out.map(|t| t.to_rfc3339()),
            work_percentage: summary.work_percentage,
            break_percentage: summary.break_percentage,
            breaks: summary.breaks.iter().map(BreakExport::from).collect(),
            entries: summary.entries.iter().map(EntryExport::from).collect(),
        }
    }
}

/// Key metrics as `(label, value)` rows for the PDF.
pub(crate) fn metrics_table(summary: &DailySummary) -> Vec<Vec<String>> {
    let or_na = |v: Option<String>| v.unwrap_or_else(|| "N/A".to_string());
    vec![
        vec!["Total work".into(), format_duration(summary.total_work)],
        vec!["Total break".into(), format_duration(summary.total_break)],
        vec![
            "First clock-in".into(),
            or_na(summary.first_clock_in.as_ref().map(format_time)),
        ],
        vec![
            "Last clock-out".into(),
            or_na(summary.last_clock_out.as_ref().map(format_time)),
        ],
        vec![
            "Work / break".into(),
            format!(
                "{}% / {}%",
                summary.work_percentage, summary.break_percentage
            ),
        ],
    ]
}

pub(crate) fn breaks_table(summary: &DailySummary) -> Vec<Vec<String>> {
    summary
        .breaks
        .iter()
        .map(|b| {
            vec![
                format_time(&b.start),
                format_time(&b.end),
                format_duration(b.duration_ms),
            ]
        })
        .collect()
}

pub(crate) fn entries_table(summary: &DailySummary) -> Vec<Vec<String>> {
    summary
        .entries
        .iter()
        .map(|e| {
            vec![
                e.short_id().to_string(),
                format_date_time(&e.clock_in),
                e.clock_out
                    .as_ref()
                    .map_or_else(|| "In progress".to_string(), format_date_time),
                format_duration(entry_duration(e)),
            ]
        })
        .collect()
}
