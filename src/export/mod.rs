// src/export/mod.rs

pub mod csv;
pub(crate) mod fs_utils;
pub mod json;

pub use self::csv::{CSV_HEADER, to_csv};
pub use self::json::{EntryExport, to_json};

use crate::core::period::DateRange;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, count: usize, path: &Path) {
    success(format!(
        "{label} export completed: {count} entries → {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

/// `report_<start>_to_<end>.<ext>`, dates as `YYYY-MM-DD`.
pub fn report_file_name(range: &DateRange, format: ExportFormat) -> String {
    format!(
        "report_{}_to_{}.{}",
        range.start.format("%Y-%m-%d"),
        range.end.format("%Y-%m-%d"),
        format.as_str()
    )
}
