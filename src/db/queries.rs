use crate::errors::{AppError, AppResult};
use crate::models::calendar::{Holiday, Recess};
use crate::models::employee::{Employee, Role};
use crate::models::organization::Organization;
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::models::schedule::ScheduleGroup;
use crate::utils::date::civil_date;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn conversion_err(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

fn parse_timestamp(raw: &str) -> rusqlite::Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_err(AppError::InvalidTime(raw.to_string())))
}

fn parse_date(raw: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| conversion_err(AppError::InvalidDate(raw.to_string())))
}

// ---------------------------
// Punches
// ---------------------------

pub fn map_punch_row(row: &Row) -> rusqlite::Result<Punch> {
    let ts_raw: String = row.get("timestamp")?;
    let kind_raw: String = row.get("kind")?;

    let kind = PunchKind::from_db_str(&kind_raw)
        .ok_or_else(|| conversion_err(AppError::InvalidPunchKind(kind_raw.clone())))?;

    Ok(Punch {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        timestamp: parse_timestamp(&ts_raw)?,
        kind,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        location_valid: row.get::<_, i64>("location_valid")? == 1,
        manual_edit: row.get::<_, i64>("manual_edit")? == 1,
        note: row.get("note")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a punch. Returns false when an identical (employee, timestamp)
/// row already exists: the UNIQUE constraint suppresses the duplicate.
pub fn insert_punch(conn: &Connection, punch: &Punch) -> AppResult<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO punches
            (employee_id, timestamp, date, kind, latitude, longitude,
             location_valid, manual_edit, note, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            punch.employee_id,
            punch.timestamp.to_rfc3339(),
            civil_date(punch.timestamp).format("%Y-%m-%d").to_string(),
            punch.kind.to_db_str(),
            punch.latitude,
            punch.longitude,
            if punch.location_valid { 1 } else { 0 },
            if punch.manual_edit { 1 } else { 0 },
            punch.note,
            punch.source,
            punch.created_at,
        ],
    )?;
    Ok(changed > 0)
}

/// Punches of one employee with civil dates in [start, end], ascending.
pub fn punches_between(
    conn: &Connection,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<Punch>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM punches
         WHERE employee_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC, timestamp ASC",
    )?;

    let rows = stmt.query_map(
        params![
            employee_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_punch_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Employees
// ---------------------------

fn map_employee_row(row: &Row) -> rusqlite::Result<Employee> {
    let role_raw: String = row.get("role")?;
    let role = Role::from_db_str(&role_raw)
        .ok_or_else(|| conversion_err(AppError::Other(format!("invalid role: {role_raw}"))))?;

    let accrual_start: Option<String> = row.get("accrual_start")?;
    let accrual_start = match accrual_start {
        Some(raw) => Some(parse_date(&raw)?),
        None => None,
    };

    Ok(Employee {
        id: row.get("id")?,
        username: row.get("username")?,
        role,
        organization_id: row.get("organization_id")?,
        schedule_group_id: row.get("schedule_group_id")?,
        daily_minutes: row.get("daily_minutes")?,
        individual_override: row.get::<_, i64>("individual_override")? == 1,
        individual_workdays: workday_flags(row)?,
        hybrid_work: row.get::<_, i64>("hybrid_work")? == 1,
        accrual_start,
    })
}

fn workday_flags(row: &Row) -> rusqlite::Result<[bool; 7]> {
    Ok([
        row.get::<_, i64>("mon")? == 1,
        row.get::<_, i64>("tue")? == 1,
        row.get::<_, i64>("wed")? == 1,
        row.get::<_, i64>("thu")? == 1,
        row.get::<_, i64>("fri")? == 1,
        row.get::<_, i64>("sat")? == 1,
        row.get::<_, i64>("sun")? == 1,
    ])
}

pub fn employee_by_username(conn: &Connection, username: &str) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM employees WHERE username = ?1")?;
    Ok(stmt
        .query_row([username], map_employee_row)
        .optional()?)
}

#[allow(clippy::too_many_arguments)]
pub fn insert_employee(
    conn: &Connection,
    username: &str,
    role: Role,
    organization_id: Option<i64>,
    schedule_group_id: Option<i64>,
    daily_minutes: Option<i64>,
    accrual_start: Option<NaiveDate>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees
            (username, role, organization_id, schedule_group_id, daily_minutes,
             accrual_start, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            username,
            role.to_db_str(),
            organization_id,
            schedule_group_id,
            daily_minutes,
            accrual_start.map(|d| d.format("%Y-%m-%d").to_string()),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

// ---------------------------
// Schedule groups
// ---------------------------

pub fn schedule_group_by_id(conn: &Connection, id: i64) -> AppResult<Option<ScheduleGroup>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM schedule_groups WHERE id = ?1")?;
    Ok(stmt
        .query_row([id], |row| {
            Ok(ScheduleGroup {
                id: row.get("id")?,
                name: row.get("name")?,
                workdays: workday_flags(row)?,
                daily_minutes: row.get("daily_minutes")?,
            })
        })
        .optional()?)
}

pub fn schedule_group_by_name(conn: &Connection, name: &str) -> AppResult<Option<i64>> {
    let mut stmt = conn.prepare_cached("SELECT id FROM schedule_groups WHERE name = ?1")?;
    Ok(stmt.query_row([name], |row| row.get(0)).optional()?)
}

pub fn insert_schedule_group(
    conn: &Connection,
    name: &str,
    workdays: [bool; 7],
    daily_minutes: Option<i64>,
) -> AppResult<i64> {
    let flags: Vec<i64> = workdays.iter().map(|w| if *w { 1 } else { 0 }).collect();
    conn.execute(
        "INSERT INTO schedule_groups (name, mon, tue, wed, thu, fri, sat, sun, daily_minutes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            name, flags[0], flags[1], flags[2], flags[3], flags[4], flags[5], flags[6],
            daily_minutes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

// ---------------------------
// Organizations / holidays / recesses
// ---------------------------

pub fn organization_by_name(conn: &Connection, name: &str) -> AppResult<Option<Organization>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM organizations WHERE name = ?1")?;
    Ok(stmt
        .query_row([name], |row| {
            Ok(Organization {
                id: row.get("id")?,
                name: row.get("name")?,
                office_latitude: row.get("office_latitude")?,
                office_longitude: row.get("office_longitude")?,
                allowed_radius_m: row.get("allowed_radius_m")?,
            })
        })
        .optional()?)
}

pub fn insert_organization(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO organizations (name) VALUES (?1)", [name])?;
    Ok(conn.last_insert_rowid())
}

pub fn holidays_by_organization(conn: &Connection, organization_id: i64) -> AppResult<Vec<Holiday>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, organization_id, date, label FROM holidays
         WHERE organization_id = ?1 ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([organization_id], |row| {
        let raw: String = row.get("date")?;
        Ok(Holiday {
            id: row.get("id")?,
            organization_id: row.get("organization_id")?,
            date: parse_date(&raw)?,
            label: row.get("label")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Unique per (organization, date); re-seeding the same holiday is a no-op.
pub fn insert_holiday(
    conn: &Connection,
    organization_id: i64,
    date: NaiveDate,
    label: &str,
) -> AppResult<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO holidays (organization_id, date, label) VALUES (?1, ?2, ?3)",
        params![organization_id, date.format("%Y-%m-%d").to_string(), label],
    )?;
    Ok(changed > 0)
}

pub fn recesses_by_organization(conn: &Connection, organization_id: i64) -> AppResult<Vec<Recess>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, organization_id, start_date, end_date, label FROM recesses
         WHERE organization_id = ?1 ORDER BY start_date ASC",
    )?;

    let rows = stmt.query_map([organization_id], |row| {
        let start_raw: String = row.get("start_date")?;
        let end_raw: String = row.get("end_date")?;
        Ok(Recess {
            id: row.get("id")?,
            organization_id: row.get("organization_id")?,
            start: parse_date(&start_raw)?,
            end: parse_date(&end_raw)?,
            label: row.get("label")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_recess(
    conn: &Connection,
    organization_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    label: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO recesses (organization_id, start_date, end_date, label)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            organization_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
            label,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
