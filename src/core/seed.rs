//! Demo-data importer: fills a database with a realistic month of punches
//! for one employee, skipping weekends and holidays, so a fresh install is
//! immediately reportable.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Role;
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::info;
use crate::utils::date::weekday_index;
use crate::utils::time::parse_time_or_err;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone, Timelike};

const DEMO_ORGANIZATION: &str = "Exemplo Ltda";
const DEMO_SCHEDULE_GROUP: &str = "Administrativo (Seg-Sex)";
const YEAR_END_RECESS: &str = "Recesso de fim de ano";
const IMPORT_NOTE: &str = "Importação automática";

/// (entry "HH:MM", lunch minutes, exit "HH:MM"), one tuple per working day.
const DAY_PLANS: &[(&str, i64, &str)] = &[
    ("08:30", 20, "17:57"),
    ("08:30", 25, "17:24"),
    ("08:30", 30, "15:50"),
    ("08:30", 30, "15:45"),
    ("08:30", 20, "17:23"),
    ("08:30", 25, "17:05"),
    ("12:56", 0, "17:00"), // no lunch
    ("08:33", 30, "15:15"),
    ("08:32", 22, "16:33"),
    ("08:25", 23, "15:55"),
    ("08:30", 30, "16:02"),
    ("08:23", 40, "15:06"),
    ("08:32", 30, "15:45"),
    ("08:11", 10, "15:00"),
    ("08:26", 20, "16:01"),
    ("08:37", 17, "17:00"),
    ("08:05", 0, "14:05"), // no lunch
    ("08:30", 25, "17:06"),
    ("08:20", 33, "15:50"),
    ("08:26", 12, "16:27"),
    ("08:30", 30, "15:15"),
    ("08:28", 30, "15:55"),
    ("08:36", 20, "15:15"),
    ("08:28", 20, "16:00"),
    ("08:24", 26, "17:05"),
    ("08:30", 10, "17:15"),
    ("08:30", 20, "15:35"),
    ("08:30", 20, "17:00"),
    ("08:30", 20, "17:05"),
];

/// Fixed-date national holidays seeded for the given year.
fn holidays_for_year(year: i32) -> Vec<(NaiveDate, &'static str)> {
    [
        (11, 2, "Finados"),
        (11, 15, "Proclamação da República"),
        (11, 20, "Dia da Consciência Negra"),
        (12, 8, "Imaculada Conceição"),
        (12, 25, "Natal"),
    ]
    .iter()
    .filter_map(|(m, d, label)| NaiveDate::from_ymd_opt(year, *m, *d).map(|dt| (dt, *label)))
    .collect()
}

#[derive(Debug, Default)]
pub struct SeedSummary {
    pub days: usize,
    pub inserted: usize,
    pub duplicates: usize,
}

pub struct SeedLogic;

impl SeedLogic {
    /// Seed punches for `username` starting at `start`. Creates the demo
    /// organization, schedule group, holidays, year-end recess and the
    /// employee itself when missing. Re-running is harmless: every insert
    /// is duplicate-suppressed on (employee, timestamp).
    pub fn run(pool: &mut DbPool, username: &str, start: NaiveDate) -> AppResult<SeedSummary> {
        let conn = &pool.conn;
        let year = start.year();

        // 1. Organization with its calendar exceptions.
        let org_id = match queries::organization_by_name(conn, DEMO_ORGANIZATION)? {
            Some(org) => org.id,
            None => {
                info(format!("Creating organization '{DEMO_ORGANIZATION}'..."));
                queries::insert_organization(conn, DEMO_ORGANIZATION)?
            }
        };

        for (date, label) in holidays_for_year(year) {
            queries::insert_holiday(conn, org_id, date, label)?;
        }

        if queries::recesses_by_organization(conn, org_id)?
            .iter()
            .all(|r| r.label != YEAR_END_RECESS)
            && let (Some(rs), Some(re)) = (
                NaiveDate::from_ymd_opt(year, 12, 26),
                NaiveDate::from_ymd_opt(year, 12, 31),
            )
        {
            queries::insert_recess(conn, org_id, rs, re, YEAR_END_RECESS)?;
        }

        // 2. Schedule group.
        let group_id = match queries::schedule_group_by_name(conn, DEMO_SCHEDULE_GROUP)? {
            Some(id) => id,
            None => queries::insert_schedule_group(
                conn,
                DEMO_SCHEDULE_GROUP,
                [true, true, true, true, true, false, false],
                Some(480),
            )?,
        };

        // 3. Employee.
        let employee = match queries::employee_by_username(conn, username)? {
            Some(e) => e,
            None => {
                info(format!("Creating employee '{username}'..."));
                queries::insert_employee(
                    conn,
                    username,
                    Role::Funcionario,
                    Some(org_id),
                    Some(group_id),
                    None,
                    None,
                )?;
                queries::employee_by_username(conn, username)?
                    .ok_or_else(|| AppError::UnknownEmployee(username.to_string()))?
            }
        };

        let holiday_dates: Vec<NaiveDate> = queries::holidays_by_organization(conn, org_id)?
            .into_iter()
            .map(|h| h.date)
            .collect();

        // 4. Walk the plans over business days.
        let mut summary = SeedSummary::default();
        let mut cursor = start;

        for (entry_raw, lunch_minutes, exit_raw) in DAY_PLANS {
            while weekday_index(cursor) >= 5 || holiday_dates.contains(&cursor) {
                cursor = cursor.succ_opt().unwrap_or(cursor);
            }

            let entry = parse_time_or_err(entry_raw)?;
            let exit = parse_time_or_err(exit_raw)?;

            summary.days += 1;

            record(conn, &mut summary, &employee, cursor, entry, PunchKind::Entrada)?;

            if *lunch_minutes > 0 {
                // Lunch leaves at noon; shifted after a post-noon arrival.
                let lunch_hour = if entry.hour() >= 12 { entry.hour() + 1 } else { 12 };

                if let Some(lunch_out) = NaiveTime::from_hms_opt(lunch_hour, 0, 0) {
                    let lunch_back = lunch_out + Duration::minutes(*lunch_minutes);
                    record(conn, &mut summary, &employee, cursor, lunch_out, PunchKind::SaidaAlmoco)?;
                    record(conn, &mut summary, &employee, cursor, lunch_back, PunchKind::VoltaAlmoco)?;
                }
            }

            record(conn, &mut summary, &employee, cursor, exit, PunchKind::Saida)?;

            cursor = cursor.succ_opt().unwrap_or(cursor);
        }

        crate::db::log::audit(
            &pool.conn,
            "seed",
            username,
            &format!(
                "Seeded {} punches over {} days ({} duplicates skipped)",
                summary.inserted, summary.days, summary.duplicates
            ),
        )?;

        Ok(summary)
    }
}

fn record(
    conn: &rusqlite::Connection,
    summary: &mut SeedSummary,
    employee: &crate::models::employee::Employee,
    date: NaiveDate,
    time: NaiveTime,
    kind: PunchKind,
) -> AppResult<()> {
    let ts = Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{date} {time}")))?;

    let mut punch = Punch::new(employee.id, ts, kind, None, None, None);
    punch.manual_edit = true;
    punch.note = Some(IMPORT_NOTE.to_string());
    punch.source = "seed".to_string();

    if queries::insert_punch(conn, &punch)? {
        summary.inserted += 1;
    } else {
        summary.duplicates += 1;
    }
    Ok(())
}
