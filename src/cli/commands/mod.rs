//! CLI command implementations

mod train;
mod validate;


use crate::cli::LogLevel;
use crate::config::{resolve_config, Cli, Command, RunArgs, TrainingConfig};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Train(args) => train::run_train(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}

/// Defaults, then the optional YAML file, then the flags
fn resolve(args: &RunArgs) -> Result<TrainingConfig, String> {
    resolve_config(args.config.as_deref(), args.overrides()).map_err(|e| format!("Config error: {e}"))
}
