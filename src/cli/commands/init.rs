use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Create config + database files and bring the schema up to date.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = if let Some(custom) = &cli.db {
        Config {
            database: custom.clone(),
            ..Config::default()
        }
    } else {
        Config::load()
    };

    let pool = DbPool::new(&cfg.database)?;
    crate::db::initialize::init_db(&pool.conn)?;
    crate::db::log::audit(&pool.conn, "init", &cfg.database, "Database initialized")?;

    Ok(())
}
