use chrono::NaiveDate;
use serde::Serialize;

/// A single zero-expectation date. Unique per (organization, date).
#[derive(Debug, Clone, Serialize)]
pub struct Holiday {
    pub id: i64,
    pub organization_id: i64,
    pub date: NaiveDate,
    pub label: String,
}

/// An inclusive zero-expectation date range ("recesso").
#[derive(Debug, Clone, Serialize)]
pub struct Recess {
    pub id: i64,
    pub organization_id: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl Recess {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
