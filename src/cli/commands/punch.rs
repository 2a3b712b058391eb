use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status;
use crate::core::store::TimeclockStore;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::{success, warning};
use crate::utils::date::civil_date;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Register one punch. The kind defaults to the next expected one, so the
/// backend decides the sequence instead of trusting the caller.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        username,
        kind,
        at,
        latitude,
        longitude,
        note,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let timestamp = match at {
            Some(raw) => parse_at(raw)?,
            None => Local::now(),
        };

        let (employee_id, resolved_kind) = {
            let store = SqliteStore::new(&pool.conn);

            let employee = store
                .employee_by_username(username)?
                .ok_or_else(|| AppError::UnknownEmployee(username.clone()))?;

            let resolved_kind = match kind {
                Some(raw) => PunchKind::from_db_str(&raw.to_uppercase())
                    .ok_or_else(|| AppError::InvalidPunchKind(raw.clone()))?,
                None => {
                    let today_punches =
                        store.punches_on(employee.id, civil_date(timestamp))?;
                    status::project(today_punches)
                        .next
                        .ok_or_else(|| AppError::DayClosed(civil_date(timestamp).to_string()))?
                }
            };

            (employee.id, resolved_kind)
        };

        let punch = Punch::new(
            employee_id,
            timestamp,
            resolved_kind,
            *latitude,
            *longitude,
            note.clone(),
        );

        if queries::insert_punch(&pool.conn, &punch)? {
            crate::db::log::audit(
                &pool.conn,
                "punch",
                username,
                &format!(
                    "{} at {}",
                    resolved_kind.to_db_str(),
                    timestamp.format("%Y-%m-%d %H:%M")
                ),
            )?;
            success(format!(
                "{} registrado às {} para '{}'",
                resolved_kind.display(),
                timestamp.format("%H:%M"),
                username
            ));
        } else {
            warning(format!(
                "Punch at {} already registered for '{}'; nothing inserted.",
                timestamp.format("%Y-%m-%d %H:%M"),
                username
            ));
        }
    }
    Ok(())
}

fn parse_at(raw: &str) -> AppResult<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidTime(raw.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(raw.to_string()))
}
