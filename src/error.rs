//! Crate-level error type
//!
//! Every failure is fatal to a run: configuration problems surface before the
//! first batch is drawn, numeric blow-ups abort mid-loop.

use crate::config::ConfigError;
use crate::monitor::StorageError;

/// Result type for wgan-toy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing or running a training session
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration (unknown mode/dataset/penalty, bad numbers, existing log dir)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Metrics storage error: {0}")]
    Storage(#[from] StorageError),

    /// Failure while rendering a frame or a loss curve
    #[error("Plot error: {0}")]
    Plot(String),

    /// Critic loss became NaN or infinite
    #[error("Numeric instability at iteration {iteration}: critic loss is {loss}")]
    NumericInstability { iteration: usize, loss: f32 },
}
