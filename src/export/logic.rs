// src/export/logic.rs

use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::load_stats;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::StatsExport;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use std::path::Path;

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export stored daily rows.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or any period accepted by `parse_period`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let rows: Vec<StatsExport> = load_stats(pool, bounds)?
            .iter()
            .map(StatsExport::from)
            .collect();

        if rows.is_empty() {
            warning("No stored days match the requested range.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_or_warn(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} day(s) exported to {}", rows.len(), path.display()),
        );

        Ok(rows.len())
    }
}
