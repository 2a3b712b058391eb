use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::seed::SeedLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { username, start } = cmd {
        let start = parse_date(start).ok_or_else(|| AppError::InvalidDate(start.clone()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let summary = SeedLogic::run(&mut pool, username, start)?;

        success(format!(
            "Seed completed: {} punches over {} days ({} duplicates skipped).",
            summary.inserted, summary.days, summary.duplicates
        ));
    }
    Ok(())
}
