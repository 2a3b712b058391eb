use crate::utils::time::{format_minutes, format_minutes_signed};
use chrono::NaiveDate;
use serde::Serialize;

/// Mutually exclusive classification of a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DayClass {
    /// Scheduled day with punches and a resolved balance.
    Worked,
    /// Organization holiday (zero expected minutes).
    Holiday(String),
    /// Organization recess (zero expected minutes).
    Recess(String),
    /// Scheduled day in the past with no punches at all.
    Absence,
    /// Ordinary weekday off (outside the work-weekday set).
    DayOff,
    /// Today, with the punch sequence not yet closed by SAIDA.
    InProgress,
}

impl DayClass {
    /// Marker used by exports and the full report ("FALTA", "FERIADO", ...).
    pub fn marker(&self) -> &'static str {
        match self {
            DayClass::Worked => "NORMAL",
            DayClass::Holiday(_) => "FERIADO",
            DayClass::Recess(_) => "RECESSO",
            DayClass::Absence => "FALTA",
            DayClass::DayOff => "FDS",
            DayClass::InProgress => "EM ANDAMENTO",
        }
    }
}

/// One day of the banco de horas report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub worked_minutes: i64,
    pub expected_minutes: i64,
    /// `None` while the day is unresolved (in progress).
    pub balance_minutes: Option<i64>,
    pub class: DayClass,
}

impl ReportRow {
    /// Short date label used by the interactive report ("dd/mm").
    pub fn date_label(&self) -> String {
        self.date.format("%d/%m").to_string()
    }

    pub fn worked_str(&self) -> String {
        format_minutes(self.worked_minutes)
    }

    /// "±HH:MM" for resolved days, "Em andamento" otherwise.
    pub fn balance_str(&self) -> String {
        match self.balance_minutes {
            Some(m) => format_minutes_signed(m),
            None => "Em andamento".to_string(),
        }
    }
}

/// Full result of an accrual walk: rows in ascending date order plus the
/// accumulated balance over every resolved day.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BalanceReport {
    pub rows: Vec<ReportRow>,
    pub total_minutes: i64,
}

impl BalanceReport {
    pub fn total_str(&self) -> String {
        format_minutes_signed(self.total_minutes)
    }
}
