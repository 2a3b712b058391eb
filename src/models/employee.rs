use chrono::NaiveDate;
use serde::Serialize;

/// Employee roles, mirrored in the `employees.role` CHECK constraint.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Role {
    Admin,
    Funcionario,
}

impl Role {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Funcionario => "FUNCIONARIO",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Role::Admin),
            "FUNCIONARIO" => Some(Role::Funcionario),
            _ => None,
        }
    }
}

/// Employee record with its schedule configuration.
///
/// Schedule precedence (resolved in `core::schedule`):
/// individual flags (when `individual_override`) → schedule group → defaults.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub organization_id: Option<i64>,
    pub schedule_group_id: Option<i64>,

    /// Own expected daily duration in minutes. When set it beats the
    /// group's duration, even without the individual override.
    pub daily_minutes: Option<i64>,

    /// When true the individual weekday flags below replace the group.
    pub individual_override: bool,
    pub individual_workdays: [bool; 7], // Mon..Sun

    /// Allows punching outside the office radius (carried, not enforced).
    pub hybrid_work: bool,

    /// Days strictly before this date are excluded from accrual entirely.
    pub accrual_start: Option<NaiveDate>,
}
