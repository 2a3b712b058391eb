use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accrual::{self, ReportMode, ReportOptions};
use crate::core::pairing::PairingMode;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::report::DayClass;
use crate::utils::colors::{colorize_balance, colorize_class};
use crate::utils::date::today;
use crate::utils::table::Table;
use chrono::Duration;

/// Interactive banco de horas report, newest day first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        username,
        range,
        full,
    } = cmd
    {
        let (start, end) = match range {
            Some(r) => parse_range(r)?,
            None => {
                let end = today();
                (end - Duration::days(cfg.report_window_days - 1), end)
            }
        };

        let opts = ReportOptions {
            mode: if *full {
                ReportMode::Complete
            } else {
                ReportMode::Compact
            },
            pairing: PairingMode::from_config(cfg),
            fallback_daily_minutes: cfg.default_daily_minutes,
        };

        let pool = DbPool::new(&cfg.database)?;
        let store = SqliteStore::new(&pool.conn);
        let report = accrual::build_report(&store, username, start, end, &opts)?;

        println!(
            "\nBanco de horas de '{}' ({} a {})\n",
            username,
            start.format("%d/%m/%Y"),
            end.min(today()).format("%d/%m/%Y")
        );

        if report.rows.is_empty() {
            println!("Nenhum dia a exibir no período.");
        } else {
            let mut table = Table::new(vec!["Data", "Trabalhado", "Saldo", ""]);

            // Display order is newest-first; rows come back ascending.
            for row in report.rows.iter().rev() {
                let marker = match &row.class {
                    DayClass::Worked => String::new(),
                    DayClass::Holiday(label) | DayClass::Recess(label) => {
                        format!("{} ({})", row.class.marker(), label)
                    }
                    _ => row.class.marker().to_string(),
                };

                let plain = vec![
                    row.date_label(),
                    row.worked_str(),
                    row.balance_str(),
                    marker.clone(),
                ];
                let cells = vec![
                    row.date_label(),
                    row.worked_str(),
                    colorize_balance(row.balance_minutes, &row.balance_str()),
                    colorize_class(&row.class, &marker),
                ];
                table.add_row(cells, plain);
            }

            println!("{}", table.render());
        }

        println!(
            "Saldo total: {}",
            colorize_balance(Some(report.total_minutes), &report.total_str())
        );
    }
    Ok(())
}
