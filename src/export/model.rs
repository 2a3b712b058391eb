use crate::models::report::{BalanceReport, DayClass, ReportRow};
use crate::utils::date::weekday_tag;
use serde::Serialize;

/// Flat per-day row for the printable report (one line per day of the
/// window, complete mode).
#[derive(Serialize, Clone, Debug)]
pub struct ReportExportRow {
    pub date: String,
    pub weekday: String,
    pub worked: String,
    pub expected: String,
    pub balance: String,
    pub status: String,
    pub label: String,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date", "weekday", "worked", "expected", "balance", "status", "label",
    ]
}

pub(crate) fn to_export_row(row: &ReportRow) -> ReportExportRow {
    let label = match &row.class {
        DayClass::Holiday(l) | DayClass::Recess(l) => l.clone(),
        _ => String::new(),
    };

    ReportExportRow {
        date: row.date.format("%Y-%m-%d").to_string(),
        weekday: weekday_tag(row.date).to_string(),
        worked: row.worked_str(),
        expected: crate::utils::time::format_minutes(row.expected_minutes),
        balance: row.balance_str(),
        status: row.class.marker().to_string(),
        label,
    }
}

pub(crate) fn report_to_rows(report: &BalanceReport) -> Vec<ReportExportRow> {
    report.rows.iter().map(to_export_row).collect()
}

/// Table-of-strings form used by the PDF writer.
pub(crate) fn rows_to_table(rows: &[ReportExportRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.weekday.clone(),
                r.worked.clone(),
                r.expected.clone(),
                r.balance.clone(),
                r.status.clone(),
                r.label.clone(),
            ]
        })
        .collect()
}
