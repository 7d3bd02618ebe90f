//! Run configuration: schema, layering, validation and the settings record

mod cli;
mod overrides;
mod schema;
mod settings;
mod validate;

pub use cli::{parse_args, Cli, Command, RunArgs};
pub use overrides::{load_overrides, resolve_config, ConfigOverrides};
pub use schema::{DatasetKind, GanMode, PenaltyMode, TrainingConfig};
pub use settings::{create_log_dir, settings_record, write_settings, SETTINGS_FILE};
pub use validate::{ensure_fresh_log_dir, validate_config, ConfigError};
