//! Dense layer

use ndarray::{Array1, Array2};
use rand::Rng;

/// Weight initialization scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Init {
    /// Uniform with standard deviation `sqrt(2 / fan_in)`, for ReLU layers
    He,
    /// Uniform with standard deviation `sqrt(1 / fan_in)`, for output layers
    Lecun,
}

impl Init {
    fn std(self, fan_in: usize) -> f32 {
        let gain = match self {
            Init::He => 2.0,
            Init::Lecun => 1.0,
        };
        (gain / fan_in as f32).sqrt()
    }
}

/// Affine map `x W + b` with `W` stored as `in x out`
#[derive(Debug, Clone, PartialEq)]
pub struct Linear {
    pub weight: Array2<f32>,
    pub bias: Array1<f32>,
}

impl Linear {
    /// Uniform initialization with the scheme's standard deviation; zero bias
    pub fn new<R: Rng>(n_in: usize, n_out: usize, init: Init, rng: &mut R) -> Self {
        // A uniform on [-a, a] has standard deviation a / sqrt(3)
        let bound = init.std(n_in) * 3f32.sqrt();
        let weight = Array2::from_shape_fn((n_in, n_out), |_| rng.random_range(-bound..bound));
        Self::from_parts(weight, Array1::zeros(n_out))
    }

    /// Build a layer from explicit values
    pub fn from_parts(weight: Array2<f32>, bias: Array1<f32>) -> Self {
        Self { weight, bias }
    }

    pub fn forward(&self, x: &Array2<f32>) -> Array2<f32> {
        x.dot(&self.weight) + &self.bias
    }

    pub fn num_parameters(&self) -> usize {
        self.weight.len() + self.bias.len()
    }
}

/// Gradient of a scalar objective with respect to one [`Linear`]
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGrad {
    pub weight: Array2<f32>,
    pub bias: Array1<f32>,
}

impl LinearGrad {
    pub fn zeros_like(layer: &Linear) -> Self {
        Self { weight: Array2::zeros(layer.weight.raw_dim()), bias: Array1::zeros(layer.bias.len()) }
    }
}
