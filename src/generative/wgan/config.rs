//! Model-side view of the run configuration.

use serde::{Deserialize, Serialize};

use crate::config::{GanMode, PenaltyMode, TrainingConfig};
use crate::penalty::Penalty;

/// Settings the networks and their optimizers are built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WganConfig {
    /// Optimizer family, clipping and whether the penalty is active
    pub mode: GanMode,
    /// Hidden width of both networks
    pub dim: usize,
    /// Points the generator produces per step
    pub batch_size: usize,
    /// Penalty formulation used in `wgan-gp` mode
    pub penalty_mode: PenaltyMode,
    /// Only penalize slopes above one
    pub one_sided: bool,
    /// λ in the critic loss
    pub penalty_weight: f32,
    /// Generator without parameters
    pub fixed_generator: bool,
}

impl WganConfig {
    /// Resolved penalty, `None` in `wgan` mode
    pub fn penalty(&self) -> Option<Penalty> {
        self.mode
            .uses_penalty()
            .then(|| Penalty::from_config(self.penalty_mode, self.one_sided))
    }
}

impl Default for WganConfig {
    fn default() -> Self {
        Self::from(&TrainingConfig::default())
    }
}

impl From<&TrainingConfig> for WganConfig {
    fn from(config: &TrainingConfig) -> Self {
        Self {
            mode: config.mode,
            dim: config.dim,
            batch_size: config.batch_size,
            penalty_mode: config.penalty_mode,
            one_sided: config.one_sided,
            penalty_weight: config.penalty_weight,
            fixed_generator: config.fixed_generator,
        }
    }
}
