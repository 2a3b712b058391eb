//! Date utilities.
//!
//! Every timestamp→civil-date conversion in the crate goes through
//! `civil_date`, and `today` is the single definition of "today". The
//! calendar walk's correctness depends on both using one consistent
//! civil-calendar view of the local timezone.

use chrono::{DateTime, Datelike, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Local civil date of a timezone-aware instant.
pub fn civil_date(ts: DateTime<Local>) -> NaiveDate {
    ts.date_naive()
}

/// Monday-first weekday index, 0..=6.
pub fn weekday_index(d: NaiveDate) -> usize {
    d.weekday().num_days_from_monday() as usize
}

/// Short Portuguese weekday tag used by exports.
pub fn weekday_tag(d: NaiveDate) -> &'static str {
    match weekday_index(d) {
        0 => "seg",
        1 => "ter",
        2 => "qua",
        3 => "qui",
        4 => "sex",
        5 => "sab",
        _ => "dom",
    }
}

/// All dates from `start` to `end` inclusive, ascending.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;
    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }
    out
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
