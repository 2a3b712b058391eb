//! Database maintenance helpers behind the `db` subcommand.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn integrity_check(pool: &mut DbPool) -> AppResult<()> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if result == "ok" {
        success("Database integrity: OK");
    } else {
        warning(format!("Database integrity issues: {result}"));
    }
    Ok(())
}

pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM")?;
    success("Database optimized (VACUUM).");
    Ok(())
}

pub fn print_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    info(format!("Database: {db_path}"));

    if let Ok(meta) = fs::metadata(db_path) {
        info(format!("Size: {} bytes", meta.len()));
    }

    for table in [
        "organizations",
        "schedule_groups",
        "employees",
        "punches",
        "holidays",
        "recesses",
        "log",
    ] {
        let count: i64 = pool
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        println!("  {table:<16} {count}");
    }

    Ok(())
}
