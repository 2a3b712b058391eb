use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status;
use crate::core::store::TimeclockStore;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date::today;
use crate::utils::table::Table;

/// Show today's punch history, the elapsed time and the next action.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { username } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let store = SqliteStore::new(&pool.conn);

        let employee = store
            .employee_by_username(username)?
            .ok_or_else(|| AppError::UnknownEmployee(username.clone()))?;

        let punches = store.punches_on(employee.id, today())?;
        let day = status::project(punches);

        println!("\n=== {} - {} ===\n", username, today().format("%d/%m/%Y"));

        if day.history.is_empty() {
            println!("Nenhuma batida registrada hoje.");
        } else {
            let mut table = Table::new(vec!["Hora", "Batida", "Origem"]);
            for p in &day.history {
                let cells = vec![
                    p.time_str(),
                    p.kind.display().to_string(),
                    p.source.clone(),
                ];
                table.add_row(cells.clone(), cells);
            }
            println!("{}", table.render());
        }

        println!("Horas trabalhadas hoje: {}", day.elapsed_str());

        match day.next {
            Some(kind) => println!(
                "Próxima ação: {} ({})",
                day.button_label,
                kind.to_db_str()
            ),
            None => println!("{}", day.button_label),
        }
    }
    Ok(())
}
