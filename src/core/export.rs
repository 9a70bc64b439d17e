use crate::core::calculator::summary::daily_summary;
use crate::errors::{AppError, AppResult};
use crate::export::model::{breaks_table, entries_table, metrics_table};
use crate::export::{
    DailyReport, EntryExport, ExportFormat, PdfReport, ReportTable, ensure_writable, export_csv,
    export_json, notify_export_success,
};
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::{info, warning};
use crate::utils::formatting::format_date;
use chrono::{DateTime, Local, NaiveDate};
use std::path::{Path, PathBuf};

/// High-level logic for the daily report export.
pub struct ExportLogic;

/// `TimeFlow-Summary-YYYY-MM-DD.<ext>`
pub fn default_file_name(day: NaiveDate, format: ExportFormat) -> PathBuf {
    PathBuf::from(format!(
        "TimeFlow-Summary-{}.{}",
        day.format("%Y-%m-%d"),
        format.as_str()
    ))
}

impl ExportLogic {
    /// Write the report of `day` to `path`. Returns `false` (and writes
    /// nothing) when the day has no entries.
    pub fn export(
        entries: &[TimeEntry],
        day: NaiveDate,
        now: DateTime<Local>,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<bool> {
        let summary = daily_summary(entries, day, now);
        if summary.is_empty() {
            warning(format!("No entries recorded for {day}, nothing to export."));
            return Ok(false);
        }

        ensure_writable(path, force)?;
        info(format!("Exporting {format} report to {}", path.display()));

        match format {
            ExportFormat::Json => export_json(&DailyReport::new(day, &summary), path)?,
            ExportFormat::Csv => {
                let rows: Vec<EntryExport> = summary.entries.iter().map(EntryExport::from).collect();
                export_csv(&rows, path)?
            }
            ExportFormat::Pdf => {
                let title = match summary.first_clock_in {
                    Some(first) => format!("Daily Report - {}", format_date(&first)),
                    None => format!("Daily Report - {day}"),
                };

                let tables = [
                    ReportTable {
                        caption: "Summary".into(),
                        headers: vec!["Metric", "Value"],
                        rows: metrics_table(&summary),
                    },
                    ReportTable {
                        caption: format!("Breaks taken ({})", summary.breaks.len()),
                        headers: vec!["Start", "End", "Duration"],
                        rows: breaks_table(&summary),
                    },
                    ReportTable {
                        caption: "Entries".into(),
                        headers: vec!["Id", "Clock in", "Clock out", "Duration"],
                        rows: entries_table(&summary),
                    },
                ];

                let mut pdf = PdfReport::new(&title);
                for table in &tables {
                    pdf.add_table(table);
                }
                pdf.save(path)
                    .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

                notify_export_success(format, path);
            }
        }

        Ok(true)
    }
}
