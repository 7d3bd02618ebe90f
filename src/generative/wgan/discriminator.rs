//! Critic network: 2 → dim → dim → dim → 1

use ndarray::{Array1, Array2, Axis};
use rand::Rng;

use crate::nn::{ForwardTrace, Gradients, Mlp};
use crate::penalty::Critic;

/// Real-valued scoring network
#[derive(Debug, Clone)]
pub struct Discriminator {
    net: Mlp,
}

impl Discriminator {
    /// Create a new discriminator with hidden width `dim`
    pub fn new<R: Rng>(dim: usize, rng: &mut R) -> Self {
        Self { net: Mlp::new("Discriminator", &[2, dim, dim, dim, 1], rng) }
    }

    /// Create a new discriminator with a seed for reproducibility
    pub fn with_seed(dim: usize, seed: u64) -> Self {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self::new(dim, &mut rng)
    }

    pub fn net(&self) -> &Mlp {
        &self.net
    }

    pub fn net_mut(&mut self) -> &mut Mlp {
        &mut self.net
    }

    pub fn forward_trace(&self, points: &Array2<f32>) -> ForwardTrace {
        self.net.forward_trace(points)
    }

    /// Parameter gradients and input gradient for a cotangent on the scores
    pub fn backward(&self, trace: &ForwardTrace, score_cotangent: &Array1<f32>) -> (Gradients, Array2<f32>) {
        let cotangent = score_cotangent.clone().insert_axis(Axis(1));
        self.net.backward(trace, &cotangent)
    }

    /// Parameter gradients of `Σ ⟨adjoint, ∇ₓ score⟩` at `points`
    pub fn slope_backward(&self, points: &Array2<f32>, adjoint: &Array2<f32>) -> Gradients {
        self.net.input_gradient_backward(points, adjoint)
    }

    /// Get number of parameters
    #[must_use]
    pub fn num_parameters(&self) -> usize {
        self.net.num_parameters()
    }
}

impl Critic for Discriminator {
    fn score(&self, points: &Array2<f32>) -> Array1<f32> {
        self.net.forward(points).index_axis_move(Axis(1), 0)
    }

    fn input_gradient(&self, points: &Array2<f32>) -> Array2<f32> {
        self.net.input_gradient(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_discriminator_creation() {
        let disc = Discriminator::with_seed(8, 42);
        assert_eq!(disc.num_parameters(), (2 * 8 + 8) + 2 * (8 * 8 + 8) + (8 + 1));
        assert_eq!(disc.net().name(), "Discriminator");
        assert_eq!(disc.net().parameter_names()[0], "Discriminator.1.W");
    }

    #[test]
    fn test_score_shape_and_determinism() {
        let a = Discriminator::with_seed(16, 3);
        let b = Discriminator::with_seed(16, 3);
        let points = Array2::from_shape_fn((10, 2), |(i, j)| i as f32 * 0.1 - j as f32);
        let scores = a.score(&points);
        assert_eq!(scores.len(), 10);
        assert_eq!(scores, b.score(&points));
        assert_eq!(a.input_gradient(&points).dim(), (10, 2));
    }

    proptest! {
        #[test]
        fn prop_scores_finite(x in -3.0f32..3.0, y in -3.0f32..3.0, seed in 0u64..50) {
            let disc = Discriminator::with_seed(8, seed);
            let score = disc.score(&ndarray::array![[x, y]]);
            prop_assert!(score[0].is_finite());
        }
    }
}
