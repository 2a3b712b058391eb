use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::get_headers;
use crate::export::{ReportExportRow, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

fn xlsx_err(e: impl std::fmt::Display) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}

/// Row fill keyed on the day status: exception days stand out from the
/// normal zebra banding.
fn status_color(status: &str, row_idx: usize) -> Color {
    match status {
        "FALTA" => Color::RGB(0xF8D7DA),
        "FERIADO" => Color::RGB(0xE2D9F3),
        "RECESSO" => Color::RGB(0xD1ECF1),
        "EM ANDAMENTO" => Color::RGB(0xFFF3CD),
        _ if row_idx % 2 == 0 => Color::RGB(0xEAF3FB),
        _ => Color::RGB(0xFFFFFF),
    }
}

pub(crate) fn export_xlsx(
    rows: &[ReportExportRow],
    total_balance: &str,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (c, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0u32, c as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    let _ = worksheet.set_freeze_panes(1, 0);

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    for (r, row) in rows.iter().enumerate() {
        let out_row = (r + 1) as u32;
        let bg = status_color(&row.status, r);

        let values = [
            row.date.as_str(),
            row.weekday.as_str(),
            row.worked.as_str(),
            row.expected.as_str(),
            row.balance.as_str(),
            row.status.as_str(),
            row.label.as_str(),
        ];

        for (c, s) in values.iter().enumerate() {
            let fmt = Format::new()
                .set_background_color(bg)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin);

            if let Some((num_format, serial)) = parse_to_excel_date(s) {
                worksheet
                    .write_with_format(out_row, c as u16, serial, &fmt.set_num_format(num_format))
                    .map_err(xlsx_err)?;
            } else {
                worksheet
                    .write_with_format(out_row, c as u16, *s, &fmt)
                    .map_err(xlsx_err)?;
            }

            col_widths[c] = col_widths[c].max(UnicodeWidthStr::width(*s));
        }
    }

    // Summary line under the table.
    let total_row = (rows.len() + 2) as u32;
    let total_format = Format::new().set_bold();
    worksheet
        .write_with_format(total_row, 0, "Saldo banco de horas", &total_format)
        .map_err(xlsx_err)?;
    worksheet
        .write_with_format(total_row, 4, total_balance, &total_format)
        .map_err(xlsx_err)?;

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(xlsx_err)?;
    }

    workbook
        .save(path.to_str().ok_or_else(|| xlsx_err("invalid path"))?)
        .map_err(xlsx_err)?;

    notify_export_success("XLSX", path);
    Ok(())
}
