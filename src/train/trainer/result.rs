//! Training result types

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainReport {
    /// Outer iterations completed
    pub iterations: usize,
    /// Generator steps taken, no-op steps of a fixed generator included
    pub generator_steps: usize,
    /// Generator steps that changed parameters
    pub generator_updates: usize,
    /// Critic updates applied
    pub critic_updates: usize,
    /// Frames rendered
    pub frames: usize,
    /// Critic loss of the last critic update
    pub final_disc_cost: Option<f32>,
    /// Total training time in seconds
    pub elapsed_secs: f64,
}
