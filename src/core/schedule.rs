//! Schedule resolution: which weekdays an employee works and how many
//! minutes each of those days is worth.

use crate::models::employee::Employee;
use crate::models::schedule::ScheduleGroup;

/// Fallback daily duration when nothing else is configured (8h).
pub const DEFAULT_DAILY_MINUTES: i64 = 480;

const WEEKDAYS_MON_FRI: [bool; 7] = [true, true, true, true, true, false, false];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchedule {
    pub workdays: [bool; 7], // Mon..Sun
    pub daily_minutes: i64,
}

impl ResolvedSchedule {
    pub fn works_on(&self, weekday_index: usize) -> bool {
        self.workdays[weekday_index]
    }
}

/// Resolve the weekly schedule for one employee.
///
/// Strict precedence, first applicable branch wins:
/// 1. individual override flags + own duration;
/// 2. schedule group flags, duration from the employee when set, else the
///    group, else the fallback;
/// 3. Mon–Fri, duration from the employee when set, else the fallback.
///
/// Never fails; an unconfigured employee gets Mon–Fri at `fallback_minutes`.
pub fn resolve(
    employee: &Employee,
    group: Option<&ScheduleGroup>,
    fallback_minutes: i64,
) -> ResolvedSchedule {
    if employee.individual_override {
        return ResolvedSchedule {
            workdays: employee.individual_workdays,
            daily_minutes: employee.daily_minutes.unwrap_or(fallback_minutes),
        };
    }

    if let Some(g) = group {
        return ResolvedSchedule {
            workdays: g.workdays,
            daily_minutes: employee
                .daily_minutes
                .or(g.daily_minutes)
                .unwrap_or(fallback_minutes),
        };
    }

    ResolvedSchedule {
        workdays: WEEKDAYS_MON_FRI,
        daily_minutes: employee.daily_minutes.unwrap_or(fallback_minutes),
    }
}
