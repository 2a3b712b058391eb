use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate;

/// Pairing strictness for the daily aggregator (see `core::pairing`).
pub const PAIRING_POSITIONAL: &str = "positional";
pub const PAIRING_STRICT: &str = "strict";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    /// Fallback expected daily duration when neither the employee nor the
    /// schedule group define one.
    #[serde(default = "default_daily_minutes")]
    pub default_daily_minutes: i64,

    /// "positional" pairs punches by order; "strict" validates the
    /// ENTRADA/SAIDA_ALMOCO/VOLTA_ALMOCO/SAIDA sequence.
    #[serde(default = "default_pairing")]
    pub pairing: String,

    /// Window of the interactive report when no --range is given.
    #[serde(default = "default_report_window_days")]
    pub report_window_days: i64,
}

fn default_daily_minutes() -> i64 {
    480
}
fn default_pairing() -> String {
    PAIRING_POSITIONAL.to_string()
}
fn default_report_window_days() -> i64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_daily_minutes: default_daily_minutes(),
            pairing: default_pairing(),
            report_window_days: default_report_window_days(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rponto")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rponto")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rponto.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rponto.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
