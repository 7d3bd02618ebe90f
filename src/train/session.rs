//! One complete training run, from configuration to report

use crate::cli::{log, LogLevel};
use crate::config::{create_log_dir, validate_config, write_settings, TrainingConfig};
use crate::data::DataSource;
use crate::error::Result;
use crate::generative::{WassersteinGan, WganConfig};
use crate::monitor::MetricsLog;
use crate::train::{AdversarialModel, Schedule, TrainReport, Trainer};
use crate::viz::Visualizer;

/// One line of the startup parameter listing: `<name>\t<shape>`
pub fn format_parameter(name: &str, shape: &[usize]) -> String {
    let dims: Vec<String> = shape.iter().map(ToString::to_string).collect();
    format!("\t{name}\t({})", dims.join(", "))
}

/// The configured seed, or a fresh one from OS entropy
pub fn resolve_seed(config: &TrainingConfig) -> u64 {
    config.seed.unwrap_or_else(rand::random)
}

/// Validate, prepare the log directory and train
///
/// Nothing is written when the configuration is invalid or the log
/// directory already exists.
pub fn run_training(config: &TrainingConfig, level: LogLevel) -> Result<TrainReport> {
    validate_config(config)?;
    create_log_dir(&config.log_dir)?;
    log(level, LogLevel::Normal, &format!("log dir set to {}", config.log_dir.display()));

    let seed = resolve_seed(config);
    write_settings(config, seed)?;
    log(level, LogLevel::Verbose, &format!("  seed: {seed}"));
    log(
        level,
        LogLevel::Verbose,
        &format!("  device selector {} recorded, computing on CPU", config.gpu),
    );

    let data = DataSource::new(config.dataset, config.batch_size, seed)?;
    let model = WassersteinGan::with_seed(WganConfig::from(config), seed.wrapping_add(1));
    log(level, LogLevel::Normal, "Params:");
    for (name, shape) in model.parameter_shapes() {
        log(level, LogLevel::Normal, &format_parameter(&name, &shape));
    }
    if model.generator.is_fixed() {
        log(level, LogLevel::Verbose, "  generator fixed: real data plus unit Gaussian noise");
    }
    let (gen_optimizer, disc_optimizer) = model.optimizer_settings();
    log(level, LogLevel::Verbose, &format!("  generator optimizer: {gen_optimizer}"));
    log(level, LogLevel::Verbose, &format!("  critic optimizer: {disc_optimizer}"));

    let metrics = MetricsLog::create(&config.log_dir, level)?;
    let frames = Visualizer::new(&config.log_dir);
    let mut trainer = Trainer::new(model, data, frames, metrics, Schedule::from(config), level);
    let report = trainer.run()?;

    for (metric, stats) in trainer.metrics().summary()? {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "{metric}: last {:.6}, mean {:.6} (std {:.6}, range {:.6} to {:.6}) over {} flushes",
                stats.last, stats.mean, stats.std, stats.min, stats.max, stats.count
            ),
        );
    }
    let stats = &trainer.model().stats;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  model: {} generator updates, {} critic updates, {} critic weights clipped",
            stats.generator_steps, stats.critic_steps, stats.clipped_weights
        ),
    );

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Training complete: {} iterations, {} frames in {:.1}s",
            report.iterations, report.frames, report.elapsed_secs
        ),
    );
    Ok(report)
}
