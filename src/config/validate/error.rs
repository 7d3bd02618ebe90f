//! Configuration error types
//!
//! Every variant is raised eagerly at startup, before any batch is drawn.

use std::path::PathBuf;

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown mode: {0} (must be one of: wgan, wgan-gp)")]
    UnknownMode(String),

    #[error("Unknown dataset: {0} (must be one of: 8gaussians, 25gaussians, swissroll)")]
    UnknownDataset(String),

    #[error("Unknown penalty mode: {0} (must be one of: grad, pagan, ot)")]
    UnknownPenaltyMode(String),

    #[error("Log directory already exists: {}", .0.display())]
    LogDirExists(PathBuf),

    #[error("Invalid model dimension: {0} (must be > 0)")]
    InvalidDim(usize),

    #[error("Invalid critic iterations: {0} (must be > 0)")]
    InvalidCriticIters(usize),

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid iterations: {0} (must be > 0)")]
    InvalidIters(usize),

    #[error("Invalid penalty weight: {0} (must be finite and >= 0.0)")]
    InvalidPenaltyWeight(f32),

    #[error("Batch size {batch_size} exceeds the 25gaussians pool of {pool} points")]
    BatchLargerThanPool { batch_size: usize, pool: usize },

    #[error("Config file {}: {message}", path.display())]
    ConfigFile { path: PathBuf, message: String },
}
