#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rponto::core::store::TimeclockStore;
use rponto::errors::AppResult;
use rponto::models::calendar::{Holiday, Recess};
use rponto::models::employee::{Employee, Role};
use rponto::models::punch::Punch;
use rponto::models::punch_kind::PunchKind;
use rponto::models::schedule::ScheduleGroup;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rp() -> Command {
    cargo_bin_cmd!("rponto")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rponto.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path and ensure it's removed.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB and seed the demo dataset for `kleisley`.
pub fn init_db_with_seed(db_path: &str) {
    rp()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rp()
        .args(["--db", db_path, "seed", "kleisley", "--start", "2025-11-01"])
        .assert()
        .success();
}

pub fn count_punches(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM punches", [], |row| row.get(0))
        .expect("count punches")
}

// ---------------------------------------------------------------
// In-memory store for engine-level tests
// ---------------------------------------------------------------

#[derive(Default)]
pub struct MemStore {
    pub employees: Vec<Employee>,
    pub groups: Vec<ScheduleGroup>,
    pub punches: Vec<Punch>,
    pub holidays: Vec<Holiday>,
    pub recesses: Vec<Recess>,
}

impl TimeclockStore for MemStore {
    fn employee_by_username(&self, username: &str) -> AppResult<Option<Employee>> {
        Ok(self
            .employees
            .iter()
            .find(|e| e.username == username)
            .cloned())
    }

    fn schedule_group(&self, id: i64) -> AppResult<Option<ScheduleGroup>> {
        Ok(self.groups.iter().find(|g| g.id == id).cloned())
    }

    fn punches_between(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Punch>> {
        let mut out: Vec<Punch> = self
            .punches
            .iter()
            .filter(|p| p.employee_id == employee_id)
            .filter(|p| {
                let d = p.date();
                start <= d && d <= end
            })
            .cloned()
            .collect();
        out.sort_by_key(|p| p.timestamp);
        Ok(out)
    }

    fn holidays(&self, organization_id: i64) -> AppResult<Vec<Holiday>> {
        Ok(self
            .holidays
            .iter()
            .filter(|h| h.organization_id == organization_id)
            .cloned()
            .collect())
    }

    fn recesses(&self, organization_id: i64) -> AppResult<Vec<Recess>> {
        Ok(self
            .recesses
            .iter()
            .filter(|r| r.organization_id == organization_id)
            .cloned()
            .collect())
    }
}

/// Employee with no group, no override: Mon–Fri / default minutes.
pub fn plain_employee(id: i64, username: &str) -> Employee {
    Employee {
        id,
        username: username.to_string(),
        role: Role::Funcionario,
        organization_id: Some(1),
        schedule_group_id: None,
        daily_minutes: None,
        individual_override: false,
        individual_workdays: [true, true, true, true, true, false, false],
        hybrid_work: false,
        accrual_start: None,
    }
}

pub fn ts(date: &str, time: &str) -> DateTime<Local> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date");
    let t = chrono::NaiveTime::parse_from_str(time, "%H:%M").expect("time");
    Local
        .from_local_datetime(&d.and_time(t))
        .earliest()
        .expect("local timestamp")
}

pub fn punch_at(employee_id: i64, date: &str, time: &str, kind: PunchKind) -> Punch {
    Punch::new(employee_id, ts(date, time), kind, None, None, None)
}

pub fn holiday(organization_id: i64, date: &str, label: &str) -> Holiday {
    Holiday {
        id: 0,
        organization_id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
        label: label.to_string(),
    }
}
