// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::range::parse_period;
use crate::export::xlsx::export_xlsx;
use crate::ledger::SharedLedger;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_absolute};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export ledger records.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or a period (`YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, or `start:end` in one of those forms)
    ///
    /// Returns the number of records written.
    pub fn export(
        ledger: &SharedLedger,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }
        let path = expand_tilde(file);

        let bounds = parse_period(range)?;

        let records = ledger.with_store(|store| Ok(store.query_range(bounds)))?;

        if records.is_empty() && bounds.is_some() {
            warning("No records found for the selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, &path)?,
            ExportFormat::Json => export_json(&records, &path)?,
            ExportFormat::Xlsx => export_xlsx(&records, &path)?,
        }

        Ok(records.len())
    }
}
