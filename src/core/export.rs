use crate::core::aggregate::filter_by_range;
use crate::core::period::DateRange;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::{ExportFormat, notify_export_success, report_file_name, to_csv, to_json};
use crate::models::Entry;
use crate::ui::messages::{info, warning};
use crate::utils::path::resolve_output;
use std::fs;
use std::path::PathBuf;

pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub range: DateRange,
    /// Explicit output path; `None` → `<export_dir>/report_<start>_to_<end>.<ext>`
    pub file: Option<&'a str>,
    pub export_dir: &'a str,
    pub force: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, count: usize },
    /// The range holds no entries: no file is produced.
    NothingToExport,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Render `entries` restricted to the request range in the requested
    /// format, without touching the filesystem.
    pub fn render(entries: &[Entry], format: ExportFormat, range: &DateRange) -> AppResult<String> {
        let filtered = filter_by_range(entries, range.start, range.end);
        match format {
            ExportFormat::Csv => to_csv(filtered),
            ExportFormat::Json => to_json(filtered),
        }
    }

    /// Export the entries of the requested range.
    ///
    /// An empty selection is refused here (warning, no file) even though
    /// the serializers themselves accept empty input.
    pub fn export(entries: &[Entry], req: &ExportRequest<'_>) -> AppResult<ExportOutcome> {
        let count = filter_by_range(entries, req.range.start, req.range.end).len();
        if count == 0 {
            warning(format!(
                "No entries found for {}. Nothing to export.",
                req.range
            ));
            return Ok(ExportOutcome::NothingToExport);
        }

        let default_name = report_file_name(&req.range, req.format);
        let path = resolve_output(req.file, req.export_dir, &default_name);

        ensure_writable(&path, req.force)?;
        ensure_parent_dir(&path)?;

        info(format!(
            "Exporting to {}: {}",
            req.format.label(),
            path.display()
        ));

        let body = Self::render(entries, req.format, &req.range)?;
        fs::write(&path, body.as_bytes())?;

        notify_export_success(req.format.label(), count, &path);
        Ok(ExportOutcome::Written { path, count })
    }
}
