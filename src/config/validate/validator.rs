//! Configuration validation logic

use std::path::Path;

use super::error::ConfigError;
use crate::config::schema::{DatasetKind, TrainingConfig};
use crate::data::GRID_POOL_LEN;

/// Validate a resolved run configuration
///
/// Checks:
/// - Sizes and counts are positive
/// - The penalty weight is a finite non-negative number
/// - A 25gaussians batch fits in the finite pool
pub fn validate_config(config: &TrainingConfig) -> Result<(), ConfigError> {
    if config.dim == 0 {
        return Err(ConfigError::InvalidDim(config.dim));
    }

    if config.critic_iters == 0 {
        return Err(ConfigError::InvalidCriticIters(config.critic_iters));
    }

    if config.batch_size == 0 {
        return Err(ConfigError::InvalidBatchSize(config.batch_size));
    }

    if config.iters == 0 {
        return Err(ConfigError::InvalidIters(config.iters));
    }

    if !config.penalty_weight.is_finite() || config.penalty_weight < 0.0 {
        return Err(ConfigError::InvalidPenaltyWeight(config.penalty_weight));
    }

    if config.dataset == DatasetKind::TwentyFiveGaussians && config.batch_size > GRID_POOL_LEN {
        return Err(ConfigError::BatchLargerThanPool {
            batch_size: config.batch_size,
            pool: GRID_POOL_LEN,
        });
    }

    Ok(())
}

/// Refuse to reuse an output directory from an earlier run
pub fn ensure_fresh_log_dir(log_dir: &Path) -> Result<(), ConfigError> {
    if log_dir.exists() {
        return Err(ConfigError::LogDirExists(log_dir.to_path_buf()));
    }
    Ok(())
}
