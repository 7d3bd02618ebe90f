//! When to update the generator and when to visualize

use crate::config::TrainingConfig;

/// Whether iteration `t` flushes metrics and renders a frame
pub fn should_visualize(t: usize) -> bool {
    t % 100 == 99 || t == 10 || t == 50
}

/// Iteration counts of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Outer iterations
    pub iters: usize,
    /// Critic updates per outer iteration
    pub critic_iters: usize,
}

impl Schedule {
    /// The generator sits out iteration 0 only
    pub fn updates_generator(&self, t: usize) -> bool {
        t > 0
    }
}

impl From<&TrainingConfig> for Schedule {
    fn from(config: &TrainingConfig) -> Self {
        Self { iters: config.iters, critic_iters: config.critic_iters }
    }
}
