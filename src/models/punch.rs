use super::punch_kind::PunchKind;
use crate::utils::date::civil_date;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// One timestamped clock event ("batida").
///
/// Immutable once stored; corrections go through the `manual_edit` flag and
/// a note, never through silent rewrites.
#[derive(Debug, Clone, Serialize)]
pub struct Punch {
    pub id: i64,
    pub employee_id: i64,
    pub timestamp: DateTime<Local>, // ⇔ punches.timestamp (TEXT, RFC3339)
    pub kind: PunchKind,            // ⇔ punches.kind
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_valid: bool,
    pub manual_edit: bool,
    pub note: Option<String>,
    pub source: String,     // ⇔ punches.source (TEXT, default 'cli')
    pub created_at: String, // ⇔ punches.created_at (TEXT, ISO8601)
}

impl Punch {
    /// High-level constructor for punches created by the CLI.
    pub fn new(
        employee_id: i64,
        timestamp: DateTime<Local>,
        kind: PunchKind,
        latitude: Option<f64>,
        longitude: Option<f64>,
        note: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            employee_id,
            timestamp,
            kind,
            latitude,
            longitude,
            // Geofence fields are carried but the check trivially accepts.
            // TODO: enforce the office radius once geofencing is wired in.
            location_valid: true,
            manual_edit: false,
            note,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Local civil date of the punch. The single conversion point is
    /// `utils::date::civil_date`; nothing else derives a day from a timestamp.
    pub fn date(&self) -> NaiveDate {
        civil_date(self.timestamp)
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    pub fn date_str(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }
}
