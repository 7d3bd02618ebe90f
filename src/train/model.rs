//! Capabilities the training loop needs from its collaborators

use ndarray::{Array1, Array2};

use crate::error::Result;
use crate::generative::CriticStep;

/// Generator and critic pair with their update rules
pub trait AdversarialModel {
    /// One generator update; `None` when the generator has no parameters
    fn generator_step(&mut self) -> Option<f32>;

    /// One critic update against `real` and a fresh fake batch
    fn critic_step(&mut self, real: &Array2<f32>) -> CriticStep;

    /// Critic score of every row of `points`
    fn critic_scores(&self, points: &Array2<f32>) -> Array1<f32>;

    /// As many generated points as `real` has rows
    fn sample(&mut self, real: &Array2<f32>) -> Array2<f32>;

    /// Names and shapes of all trainable parameters, generator first
    fn parameter_shapes(&self) -> Vec<(String, Vec<usize>)>;
}

/// Destination of the periodic visualizations
pub trait FrameSink {
    /// Render the state of `model` at `iteration` with the last real batch
    fn render<M: AdversarialModel>(&mut self, iteration: usize, real: &Array2<f32>, model: &mut M) -> Result<()>;
}
