//! Calendar exception index: holidays and recesses of one organization,
//! built once per report for O(1)/O(n) lookups inside the calendar walk.

use crate::models::calendar::{Holiday, Recess};
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayException {
    None,
    Holiday(String),
    Recess(String),
}

#[derive(Debug, Default, Clone)]
pub struct ExceptionIndex {
    holidays: HashMap<NaiveDate, String>,
    recesses: Vec<Recess>,
}

impl ExceptionIndex {
    /// Build the index from the organization's holiday and recess lists.
    /// An employee with no organization gets an empty index.
    pub fn new(holidays: Vec<Holiday>, recesses: Vec<Recess>) -> Self {
        Self {
            holidays: holidays.into_iter().map(|h| (h.date, h.label)).collect(),
            recesses,
        }
    }

    /// Classify a date. Holiday membership wins over recess inclusion;
    /// among overlapping recesses the first stored range wins. Labels never
    /// stack.
    pub fn classify(&self, date: NaiveDate) -> DayException {
        if let Some(label) = self.holidays.get(&date) {
            return DayException::Holiday(label.clone());
        }

        for r in &self.recesses {
            if r.contains(date) {
                return DayException::Recess(r.label.clone());
            }
        }

        DayException::None
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }
}
