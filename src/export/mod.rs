//! Daily report export (PDF, JSON, CSV).

mod fs_utils;
mod json_csv;
pub mod model;
mod pdf;

pub use fs_utils::ensure_writable;
pub use json_csv::{export_csv, export_json};
pub use model::{DailyReport, EntryExport};
pub use pdf::{PdfReport, ReportTable};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension, also the value accepted by `--format`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

pub(crate) fn notify_export_success(format: ExportFormat, path: &Path) {
    success(format!("{format} export completed: {}", path.display()));
}
