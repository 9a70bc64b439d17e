use crate::errors::{AppError, AppResult};
use crate::export::model::{DailyReport, EntryExport};
use crate::export::{ExportFormat, notify_export_success};
use std::fs;
use std::path::Path;

/// Whole daily report as pretty-printed JSON.
pub fn export_json(report: &DailyReport, path: &Path) -> AppResult<()> {
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)?;

    notify_export_success(ExportFormat::Json, path);
    Ok(())
}

/// One CSV row per entry; the header comes from the serde field names.
pub fn export_csv(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    let csv_err = |e: csv::Error| AppError::Export(format!("CSV error: {e}"));

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    for row in entries {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush()?;

    notify_export_success(ExportFormat::Csv, path);
    Ok(())
}
