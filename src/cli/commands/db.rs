use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `db` subcommand (migrations and maintenance).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            crate::db::migrate::run_pending_migrations(&pool.conn)?;
            success("Migrations up to date.");
        }

        if *check {
            crate::db::maintenance::integrity_check(&mut pool)?;
        }

        if *vacuum {
            crate::db::maintenance::vacuum(&mut pool)?;
        }

        if *info {
            crate::db::maintenance::print_info(&mut pool, &cfg.database)?;
        }
    }
    Ok(())
}
