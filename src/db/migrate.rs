//! Schema migrations, tracked through `PRAGMA user_version`.
//! Each migration runs at most once; `init` and `db --migrate` both funnel
//! through `run_pending_migrations`.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const MIGRATIONS: &[(i64, &str, fn(&Connection) -> rusqlite::Result<()>)] =
    &[(1, "base schema", migrate_v1_base_schema)];

/// Ensure that the `log` table exists. Created outside the numbered
/// migrations so migration runs themselves can be audited.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn set_schema_version(conn: &Connection, version: i64) -> rusqlite::Result<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {version}"))
}

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let current = schema_version(conn)?;

    for (version, name, apply) in MIGRATIONS {
        if *version <= current {
            continue;
        }

        apply(conn).map_err(|e| AppError::Migration(format!("{name}: {e}")))?;
        set_schema_version(conn, *version)?;

        crate::db::log::audit(
            conn,
            "migration_applied",
            &format!("v{version}"),
            &format!("Applied migration: {name}"),
        )?;
    }

    Ok(())
}

fn migrate_v1_base_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS organizations (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            name             TEXT NOT NULL UNIQUE,
            office_latitude  REAL,
            office_longitude REAL,
            allowed_radius_m INTEGER NOT NULL DEFAULT 50
        );

        CREATE TABLE IF NOT EXISTS schedule_groups (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL UNIQUE,
            mon           INTEGER NOT NULL DEFAULT 1,
            tue           INTEGER NOT NULL DEFAULT 1,
            wed           INTEGER NOT NULL DEFAULT 1,
            thu           INTEGER NOT NULL DEFAULT 1,
            fri           INTEGER NOT NULL DEFAULT 1,
            sat           INTEGER NOT NULL DEFAULT 0,
            sun           INTEGER NOT NULL DEFAULT 0,
            daily_minutes INTEGER
        );

        CREATE TABLE IF NOT EXISTS employees (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            username            TEXT NOT NULL UNIQUE,
            role                TEXT NOT NULL DEFAULT 'FUNCIONARIO'
                                CHECK(role IN ('ADMIN','FUNCIONARIO')),
            organization_id     INTEGER REFERENCES organizations(id),
            schedule_group_id   INTEGER REFERENCES schedule_groups(id),
            daily_minutes       INTEGER,
            individual_override INTEGER NOT NULL DEFAULT 0,
            mon                 INTEGER NOT NULL DEFAULT 1,
            tue                 INTEGER NOT NULL DEFAULT 1,
            wed                 INTEGER NOT NULL DEFAULT 1,
            thu                 INTEGER NOT NULL DEFAULT 1,
            fri                 INTEGER NOT NULL DEFAULT 1,
            sat                 INTEGER NOT NULL DEFAULT 0,
            sun                 INTEGER NOT NULL DEFAULT 0,
            hybrid_work         INTEGER NOT NULL DEFAULT 0,
            accrual_start       TEXT,
            created_at          TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS punches (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id    INTEGER NOT NULL REFERENCES employees(id),
            timestamp      TEXT NOT NULL,
            date           TEXT NOT NULL,
            kind           TEXT NOT NULL
                           CHECK(kind IN ('ENTRADA','SAIDA_ALMOCO','VOLTA_ALMOCO','SAIDA')),
            latitude       REAL,
            longitude      REAL,
            location_valid INTEGER NOT NULL DEFAULT 0,
            manual_edit    INTEGER NOT NULL DEFAULT 0,
            note           TEXT,
            source         TEXT NOT NULL DEFAULT 'cli',
            created_at     TEXT NOT NULL,
            UNIQUE(employee_id, timestamp)
        );

        CREATE INDEX IF NOT EXISTS idx_punches_employee_date
            ON punches(employee_id, date);

        CREATE TABLE IF NOT EXISTS holidays (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            organization_id INTEGER NOT NULL REFERENCES organizations(id),
            date            TEXT NOT NULL,
            label           TEXT NOT NULL,
            UNIQUE(organization_id, date)
        );

        CREATE TABLE IF NOT EXISTS recesses (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            organization_id INTEGER NOT NULL REFERENCES organizations(id),
            start_date      TEXT NOT NULL,
            end_date        TEXT NOT NULL,
            label           TEXT NOT NULL
        );
        "#,
    )
}
