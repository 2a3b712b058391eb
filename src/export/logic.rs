//! High-level export orchestration: run the accrual walk in complete mode
//! and hand the rows to the requested format writer.

use crate::config::Config;
use crate::core::accrual::{self, ReportMode, ReportOptions};
use crate::core::pairing::PairingMode;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::report_to_rows;
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::utils::date::today;
use chrono::Duration;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the banco de horas report of one employee.
    ///
    /// - `range`: `None` → the configured report window ending today;
    ///   otherwise any `export::range` expression. Parsed before anything
    ///   else, so a malformed range never starts a computation.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        username: &str,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let (start, end) = match range {
            Some(r) => parse_range(r)?,
            None => {
                let end = today();
                (end - Duration::days(cfg.report_window_days - 1), end)
            }
        };

        ensure_writable(path, force)?;

        let opts = ReportOptions {
            mode: ReportMode::Complete,
            pairing: PairingMode::from_config(cfg),
            fallback_daily_minutes: cfg.default_daily_minutes,
        };

        let store = SqliteStore::new(&pool.conn);
        let report = accrual::build_report(&store, username, start, end, &opts)?;

        let rows = report_to_rows(&report);
        let total = report.total_str();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, &total, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &total, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(username, start, end);
                export_pdf(&rows, &total, path, &title)?;
            }
        }

        crate::db::log::audit(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} report for {}", format.as_str(), username),
        )?;

        Ok(())
    }
}

fn build_pdf_title(
    username: &str,
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
) -> String {
    format!(
        "Espelho de Ponto - {} ({} a {})",
        username,
        start.format("%d/%m/%Y"),
        end.format("%d/%m/%Y")
    )
}
