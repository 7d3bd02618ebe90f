//! RMSProp optimizer

use std::fmt;

use ndarray::{ArrayD, ArrayViewD, ArrayViewMutD, Zip};

use super::Optimizer;

/// RMSProp without momentum
///
/// s_t = ρ * s_{t-1} + (1 - ρ) * g²
/// θ_t = θ_{t-1} - lr * g / √(s_t + ε)
///
/// Mean-square accumulators start at one, so early steps are damped
/// rather than normalized to unit size.
#[derive(Debug, Clone)]
pub struct RmsProp {
    lr: f32,
    decay: f32,
    epsilon: f32,
    mean_square: Vec<ArrayD<f32>>,
}

impl RmsProp {
    /// Create a new RMSProp optimizer
    pub fn new(lr: f32, decay: f32, epsilon: f32) -> Self {
        Self { lr, decay, epsilon, mean_square: Vec::new() }
    }

    /// Settings used for both players in `wgan` mode
    pub fn wgan() -> Self {
        Self::new(5e-5, 0.9, 1e-10)
    }

    fn ensure_accumulators(&mut self, grads: &[ArrayViewD<'_, f32>]) {
        if self.mean_square.len() != grads.len() {
            self.mean_square = grads.iter().map(|g| ArrayD::ones(g.raw_dim())).collect();
        }
    }
}

impl Optimizer for RmsProp {
    fn step(&mut self, params: &mut [ArrayViewMutD<'_, f32>], grads: &[ArrayViewD<'_, f32>]) {
        self.ensure_accumulators(grads);
        let (lr, decay, epsilon) = (self.lr, self.decay, self.epsilon);

        for ((param, grad), ms) in params.iter_mut().zip(grads).zip(self.mean_square.iter_mut()) {
            Zip::from(param).and(grad).and(ms).for_each(|p, &g, s| {
                *s = decay * *s + (1.0 - decay) * g * g;
                *p -= lr * g / (*s + epsilon).sqrt();
            });
        }
    }
}

impl fmt::Display for RmsProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RMSProp(lr={:e}, decay={}, eps={:e})", self.lr, self.decay, self.epsilon)
    }
}
