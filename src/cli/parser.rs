use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rponto
/// CLI time-clock: punch events and banco de horas reports over SQLite
#[derive(Parser)]
#[command(
    name = "rponto",
    version = env!("CARGO_PKG_VERSION"),
    about = "A time-clock CLI: punch ENTRADA/SAIDA events and track a banco de horas balance using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a punch for an employee
    Punch {
        /// Employee username
        username: String,

        /// Punch kind (ENTRADA, SAIDA_ALMOCO, VOLTA_ALMOCO, SAIDA).
        /// Omitted: the next expected kind is used
        #[arg(long = "kind")]
        kind: Option<String>,

        /// Punch instant "YYYY-MM-DD HH:MM" (default: now)
        #[arg(long = "at")]
        at: Option<String>,

        /// Latitude of the punch
        #[arg(long = "lat")]
        latitude: Option<f64>,

        /// Longitude of the punch
        #[arg(long = "long")]
        longitude: Option<f64>,

        /// Free-form note attached to the punch
        #[arg(long = "note")]
        note: Option<String>,
    },

    /// Show today's punch history and the next expected action
    Status {
        /// Employee username
        username: String,
    },

    /// Banco de horas report over a window (default: last 30 days)
    Report {
        /// Employee username
        username: String,

        #[arg(
            long,
            short,
            help = "Report window: year/month/day or a custom range (e.g. 2025-11 or 2025-11-01:2025-11-30)"
        )]
        range: Option<String>,

        #[arg(long = "full", help = "Include every day of the window, even empty days off")]
        full: bool,
    },

    /// Export the report as a printable document
    Export {
        /// Employee username
        username: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Export window: year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Populate the database with a demo month of punches
    Seed {
        /// Employee username (created when missing)
        username: String,

        /// First candidate day "YYYY-MM-DD"
        #[arg(long = "start")]
        start: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
