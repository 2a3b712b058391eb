//! Time utilities: parsing HH:MM, formatting minute totals.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_time_or_err(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Unsigned "HH:MM" (worked durations).
pub fn format_minutes(mins: i64) -> String {
    let m = mins.abs();
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Signed "±HH:MM" (balances). The sign is always shown; zero is "+00:00".
pub fn format_minutes_signed(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "+" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
