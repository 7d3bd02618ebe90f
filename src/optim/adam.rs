//! Adam optimizer

use std::fmt;

use ndarray::{ArrayD, ArrayViewD, ArrayViewMutD, Zip};

use super::Optimizer;

/// Adam optimizer with bias-corrected step size
///
/// m_t = β1 * m_{t-1} + (1 - β1) * g
/// v_t = β2 * v_{t-1} + (1 - β2) * g²
/// θ_t = θ_{t-1} - lr * √(1 - β2^t) / (1 - β1^t) * m_t / (√v_t + ε)
#[derive(Debug, Clone)]
pub struct Adam {
    lr: f32,
    beta1: f32,
    beta2: f32,
    epsilon: f32,
    t: u64,
    m: Vec<ArrayD<f32>>, // First moment
    v: Vec<ArrayD<f32>>, // Second moment
}

impl Adam {
    /// Create a new Adam optimizer
    pub fn new(lr: f32, beta1: f32, beta2: f32, epsilon: f32) -> Self {
        Self { lr, beta1, beta2, epsilon, t: 0, m: Vec::new(), v: Vec::new() }
    }

    /// Settings used for both players in `wgan-gp` mode
    pub fn wgan_gp() -> Self {
        Self::new(1e-4, 0.5, 0.9, 1e-8)
    }

    /// Initialize moments if needed
    fn ensure_moments(&mut self, grads: &[ArrayViewD<'_, f32>]) {
        if self.m.len() != grads.len() {
            self.m = grads.iter().map(|g| ArrayD::zeros(g.raw_dim())).collect();
            self.v = grads.iter().map(|g| ArrayD::zeros(g.raw_dim())).collect();
        }
    }
}

impl Optimizer for Adam {
    fn step(&mut self, params: &mut [ArrayViewMutD<'_, f32>], grads: &[ArrayViewD<'_, f32>]) {
        self.ensure_moments(grads);
        self.t += 1;

        // Bias correction folded into the step size
        let lr_t = self.lr
            * ((1.0 - self.beta2.powi(self.t as i32)).sqrt()
                / (1.0 - self.beta1.powi(self.t as i32)));
        let (beta1, beta2, epsilon) = (self.beta1, self.beta2, self.epsilon);

        for (((param, grad), m), v) in
            params.iter_mut().zip(grads).zip(self.m.iter_mut()).zip(self.v.iter_mut())
        {
            Zip::from(param).and(grad).and(m).and(v).for_each(|p, &g, m, v| {
                *m = beta1 * *m + (1.0 - beta1) * g;
                *v = beta2 * *v + (1.0 - beta2) * g * g;
                *p -= lr_t * *m / (v.sqrt() + epsilon);
            });
        }
    }
}

impl fmt::Display for Adam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Adam(lr={:e}, beta1={}, beta2={}, eps={:e})", self.lr, self.beta1, self.beta2, self.epsilon)
    }
}
