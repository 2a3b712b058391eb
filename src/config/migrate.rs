//! Configuration file check: report missing fields and refill them with
//! defaults without touching the values the user already set.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;

const KNOWN_KEYS: [&str; 4] = [
    "database",
    "default_daily_minutes",
    "pairing",
    "report_window_days",
];

/// Parse the on-disk config, list missing keys, and rewrite the file with
/// defaults filled in when anything was missing.
pub fn check_config() -> AppResult<()> {
    let path = Config::config_file();

    if !path.exists() {
        info("No configuration file found; run `rponto init` first.");
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;
    let yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config("config file is not a YAML mapping".into()))?;

    let missing: Vec<&str> = KNOWN_KEYS
        .iter()
        .filter(|k| !map.contains_key(&Value::String((**k).to_string())))
        .copied()
        .collect();

    if missing.is_empty() {
        success("Configuration file is complete.");
        return Ok(());
    }

    info(format!("Missing fields: {}", missing.join(", ")));

    // serde defaults fill the gaps; user-set values survive the round trip.
    let merged: Config =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
    let yaml = serde_yaml::to_string(&merged).map_err(|_| AppError::ConfigSave)?;
    fs::write(&path, yaml)?;

    success("Configuration file updated with default values.");
    Ok(())
}
