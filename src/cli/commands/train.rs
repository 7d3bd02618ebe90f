//! Train command implementation

use crate::cli::{log, LogLevel};
use crate::config::RunArgs;
use crate::train::run_training;

pub fn run_train(args: RunArgs, level: LogLevel) -> Result<(), String> {
    let config = super::resolve(&args)?;

    log(
        level,
        LogLevel::Normal,
        &format!("wgan-toy: training {} on {}", config.mode, config.dataset),
    );
    if let Some(path) = &args.config {
        log(level, LogLevel::Verbose, &format!("  Base config: {}", path.display()));
    }

    let report = run_training(&config, level).map_err(|e| format!("Training error: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  {} critic updates, {} generator updates",
            report.critic_updates, report.generator_updates
        ),
    );
    if let Some(cost) = report.final_disc_cost {
        log(level, LogLevel::Normal, &format!("Final disc cost: {cost:.6}"));
    }
    Ok(())
}
