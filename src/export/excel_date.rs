use chrono::NaiveDate;

/// Excel serial for a plain date ("YYYY-MM-DD"), with its number format.
/// Non-date cells return None and are written as text.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;

    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let days = (d - excel_epoch).num_days() as f64;

    Some(("yyyy-mm-dd", days))
}
