use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, rows_to_table};
use crate::export::pdf::{PdfManager, RowTone};
use crate::export::{ReportExportRow, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

fn tone_for_status(status: &str) -> RowTone {
    match status {
        "FALTA" => RowTone::Absence,
        "FERIADO" | "RECESSO" => RowTone::Exception,
        "EM ANDAMENTO" => RowTone::InProgress,
        _ => RowTone::Normal,
    }
}

/// Render the printable time-sheet ("espelho de ponto").
pub(crate) fn export_pdf(
    rows: &[ReportExportRow],
    total_balance: &str,
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let table = rows_to_table(rows);
    let tones: Vec<RowTone> = rows.iter().map(|r| tone_for_status(&r.status)).collect();

    let summary = format!("Saldo banco de horas: {total_balance}");

    let mut pdf = PdfManager::new();
    pdf.write_report(title, &headers, &table, &tones, &summary);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
