//! Settings record persisted at the root of every run directory

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use super::schema::{PenaltyMode, TrainingConfig};
use super::validate::ensure_fresh_log_dir;
use crate::Result;

/// File name of the settings record inside the log directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Build the settings record: every configuration value actually used
///
/// `one_sided` only means something for the gradient penalty and is left
/// out of the record otherwise. `seed` is the resolved seed, not the
/// optional one from the configuration.
pub fn settings_record(config: &TrainingConfig, seed: u64) -> Result<Value> {
    let mut record = match serde_json::to_value(config)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    if config.penalty_mode != PenaltyMode::Grad {
        record.remove("one_sided");
    }
    record.insert("seed".to_string(), Value::from(seed));
    Ok(Value::Object(record))
}

/// Create the log directory, failing if it already exists
pub fn create_log_dir(log_dir: &Path) -> Result<()> {
    ensure_fresh_log_dir(log_dir)?;
    fs::create_dir_all(log_dir)?;
    Ok(())
}

/// Write the settings record into the log directory
pub fn write_settings(config: &TrainingConfig, seed: u64) -> Result<PathBuf> {
    let path = config.log_dir.join(SETTINGS_FILE);
    let record = settings_record(config, seed)?;
    fs::write(&path, serde_json::to_string_pretty(&record)?)?;
    Ok(path)
}
