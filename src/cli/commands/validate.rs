//! Validate command implementation

use crate::cli::{log, LogLevel};
use crate::config::{ensure_fresh_log_dir, GanMode, PenaltyMode, RunArgs, TrainingConfig};

/// Format the model and schedule settings as a string
pub fn format_run_info(config: &TrainingConfig) -> String {
    let mut lines = vec![
        format!("  Mode: {}", config.mode),
        format!("  Dataset: {}", config.dataset),
        format!("  Hidden width: {}", config.dim),
        format!("  Batch size: {}", config.batch_size),
        format!("  Iterations: {}", config.iters),
        format!("  Critic iterations: {}", config.critic_iters),
    ];
    if config.fixed_generator {
        lines.push("  Generator: fixed (real data plus noise)".to_string());
    }
    lines.join("\n")
}

/// Format the critic regularization as a string
pub fn format_penalty_info(config: &TrainingConfig) -> String {
    match config.mode {
        GanMode::Wgan => "  Critic: weight clipping to [-0.01, 0.01]".to_string(),
        GanMode::WganGp => {
            let mut lines = vec![
                format!("  Penalty: {}", config.penalty_mode),
                format!("  Penalty weight: {}", config.penalty_weight),
            ];
            if config.penalty_mode == PenaltyMode::Grad {
                lines.push(format!("  One-sided: {}", config.one_sided));
            }
            lines.join("\n")
        }
    }
}

/// Format the output settings as a string
pub fn format_output_info(config: &TrainingConfig) -> String {
    let seed = config.seed.map_or_else(|| "random".to_string(), |s| s.to_string());
    format!(
        "  Log dir: {}\n  Seed: {seed}\n  GPU: {}",
        config.log_dir.display(),
        config.gpu
    )
}

/// Print detailed configuration summary
pub fn print_detailed_summary(config: &TrainingConfig) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_run_info(config));
    println!();
    println!("{}", format_penalty_info(config));
    println!();
    println!("{}", format_output_info(config));
}

pub fn run_validate(args: RunArgs, level: LogLevel) -> Result<(), String> {
    if let Some(path) = &args.config {
        log(level, LogLevel::Normal, &format!("Validating config: {}", path.display()));
    }

    let config = super::resolve(&args)?;
    ensure_fresh_log_dir(&config.log_dir).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if level == LogLevel::Verbose {
        print_detailed_summary(&config);
    }

    Ok(())
}
