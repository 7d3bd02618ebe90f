//! Update counters for WGAN training.

/// Updates applied to each player over the life of the model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WganStats {
    /// Generator updates applied
    pub generator_steps: usize,
    /// Critic updates applied
    pub critic_steps: usize,
    /// Critic weight entries pulled back into the clip box, summed over the run
    pub clipped_weights: usize,
}

impl WganStats {
    pub fn record_generator(&mut self) {
        self.generator_steps += 1;
    }

    pub fn record_critic(&mut self, clipped: usize) {
        self.critic_steps += 1;
        self.clipped_weights += clipped;
    }
}
