//! Accrual walker: the banco de horas engine.
//!
//! Walks every calendar day of a window, classifies it, aggregates worked
//! minutes, and accumulates the running balance. All stored data is fetched
//! once up front; the per-day loop touches memory only, since a window can
//! span years.

use crate::core::calendar::{DayException, ExceptionIndex};
use crate::core::pairing::{self, PairingMode};
use crate::core::schedule::{self, DEFAULT_DAILY_MINUTES};
use crate::core::store::TimeclockStore;
use crate::errors::{AppError, AppResult};
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::models::report::{BalanceReport, DayClass, ReportRow};
use crate::utils::date::{days_between, today, weekday_index};
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Interactive report: keep days with punches, absences and exception
    /// days; drop plain weekday-offs.
    Compact,
    /// Export/print: one row per day of the window, unconditionally.
    Complete,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub mode: ReportMode,
    pub pairing: PairingMode,
    pub fallback_daily_minutes: i64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            mode: ReportMode::Compact,
            pairing: PairingMode::Positional,
            fallback_daily_minutes: DEFAULT_DAILY_MINUTES,
        }
    }
}

/// Compute the banco de horas report for one employee over [start, end].
///
/// The window is clamped to today; days before the employee's accrual start
/// are excluded entirely (not emitted, never summed). Rows come back in
/// ascending date order.
pub fn build_report(
    store: &dyn TimeclockStore,
    username: &str,
    start: NaiveDate,
    end: NaiveDate,
    opts: &ReportOptions,
) -> AppResult<BalanceReport> {
    let employee = store
        .employee_by_username(username)?
        .ok_or_else(|| AppError::UnknownEmployee(username.to_string()))?;

    let group = match employee.schedule_group_id {
        Some(id) => store.schedule_group(id)?,
        None => None,
    };
    let resolved = schedule::resolve(&employee, group.as_ref(), opts.fallback_daily_minutes);

    let index = match employee.organization_id {
        Some(org) => ExceptionIndex::new(store.holidays(org)?, store.recesses(org)?),
        None => ExceptionIndex::default(),
    };

    let today = today();
    let end = end.min(today);

    let mut effective_start = start;
    if let Some(accrual_start) = employee.accrual_start
        && accrual_start > effective_start
    {
        effective_start = accrual_start;
    }

    let mut report = BalanceReport::default();
    if effective_start > end {
        return Ok(report);
    }

    // Single fetch for the whole window, grouped by civil date. Punches
    // arrive in ascending timestamp order and stay ordered per day.
    let mut by_day: HashMap<NaiveDate, Vec<Punch>> = HashMap::new();
    for punch in store.punches_between(employee.id, effective_start, end)? {
        by_day.entry(punch.date()).or_default().push(punch);
    }

    for date in days_between(effective_start, end) {
        let punches = by_day.get(&date).map(Vec::as_slice).unwrap_or(&[]);

        let exception = index.classify(date);
        let expected_minutes = match exception {
            DayException::Holiday(_) | DayException::Recess(_) => 0,
            DayException::None => {
                if resolved.works_on(weekday_index(date)) {
                    resolved.daily_minutes
                } else {
                    0
                }
            }
        };

        let worked_minutes = pairing::worked_minutes(punches, opts.pairing)?;

        // Today stays unresolved until the day is closed by a SAIDA.
        let unresolved = date == today
            && punches.last().map(|p| p.kind) != Some(PunchKind::Saida);

        let class = match exception {
            DayException::Holiday(label) => DayClass::Holiday(label),
            DayException::Recess(label) => DayClass::Recess(label),
            DayException::None => {
                if unresolved {
                    DayClass::InProgress
                } else if expected_minutes > 0 && worked_minutes == 0 && date < today {
                    DayClass::Absence
                } else if expected_minutes == 0 && punches.is_empty() {
                    DayClass::DayOff
                } else {
                    DayClass::Worked
                }
            }
        };

        let balance_minutes = if unresolved {
            None
        } else {
            Some(worked_minutes - expected_minutes)
        };
        report.total_minutes += balance_minutes.unwrap_or(0);

        let include = match opts.mode {
            ReportMode::Complete => true,
            ReportMode::Compact => {
                !punches.is_empty()
                    || matches!(
                        class,
                        DayClass::Absence | DayClass::Holiday(_) | DayClass::Recess(_)
                    )
            }
        };

        if include {
            report.rows.push(ReportRow {
                date,
                worked_minutes,
                expected_minutes,
                balance_minutes,
                class,
            });
        }
    }

    Ok(report)
}
