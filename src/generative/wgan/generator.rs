//! Generator: 2-D noise to 2-D points, or a parameter-free perturbation of the real batch

use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::nn::{ForwardTrace, Gradients, Mlp};

/// Standard normal noise, one 2-D point per row
pub fn noise<R: Rng>(rng: &mut R, n: usize) -> Array2<f32> {
    Array2::from_shape_simple_fn((n, 2), || rng.sample(StandardNormal))
}

/// Generator network or the fixed stand-in
#[derive(Debug, Clone)]
pub enum Generator {
    /// 2 → dim → dim → dim → 2 fed with N(0, I) noise
    Network(Mlp),
    /// Real batch plus N(0, I) noise; no trainable parameters
    Fixed,
}

impl Generator {
    /// Create a new generator with hidden width `dim`
    pub fn new<R: Rng>(dim: usize, fixed: bool, rng: &mut R) -> Self {
        if fixed {
            Generator::Fixed
        } else {
            Generator::Network(Mlp::new("Generator", &[2, dim, dim, dim, 2], rng))
        }
    }

    /// Create a new generator with a seed for reproducibility
    pub fn with_seed(dim: usize, fixed: bool, seed: u64) -> Self {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self::new(dim, fixed, &mut rng)
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Generator::Fixed)
    }

    /// Draw `real.nrows()` samples; only the fixed generator reads `real`
    pub fn sample<R: Rng>(&self, real: &Array2<f32>, rng: &mut R) -> Array2<f32> {
        match self {
            Generator::Network(net) => net.forward(&noise(rng, real.nrows())),
            Generator::Fixed => real + &noise(rng, real.nrows()),
        }
    }

    /// Sample `n` points and keep the trace for backpropagation
    ///
    /// `None` for the fixed generator.
    pub fn sample_traced<R: Rng>(&self, n: usize, rng: &mut R) -> Option<ForwardTrace> {
        match self {
            Generator::Network(net) => Some(net.forward_trace(&noise(rng, n))),
            Generator::Fixed => None,
        }
    }

    /// Parameter gradients for a cotangent on the generated points
    pub fn backward(&self, trace: &ForwardTrace, point_cotangent: &Array2<f32>) -> Option<Gradients> {
        match self {
            Generator::Network(net) => Some(net.backward(trace, point_cotangent).0),
            Generator::Fixed => None,
        }
    }

    pub fn net_mut(&mut self) -> Option<&mut Mlp> {
        match self {
            Generator::Network(net) => Some(net),
            Generator::Fixed => None,
        }
    }

    /// Parameter names and shapes, empty for the fixed generator
    pub fn parameter_shapes(&self) -> Vec<(String, Vec<usize>)> {
        match self {
            Generator::Network(net) => net.parameter_shapes(),
            Generator::Fixed => Vec::new(),
        }
    }

    /// Get number of parameters
    #[must_use]
    pub fn num_parameters(&self) -> usize {
        match self {
            Generator::Network(net) => net.num_parameters(),
            Generator::Fixed => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_network_generator() {
        let generator = Generator::with_seed(8, false, 1);
        assert!(!generator.is_fixed());
        let shapes = generator.parameter_shapes();
        assert_eq!(shapes.len(), 8);
        assert_eq!(shapes[0], ("Generator.1.W".to_string(), vec![2, 8]));
        assert_eq!(shapes[7], ("Generator.4.b".to_string(), vec![2]));

        let mut rng = StdRng::seed_from_u64(2);
        let samples = generator.sample(&Array2::zeros((13, 2)), &mut rng);
        assert_eq!(samples.dim(), (13, 2));
        assert!(samples.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_fixed_generator_perturbs_real_batch() {
        let generator = Generator::with_seed(8, true, 1);
        assert!(generator.is_fixed());
        assert_eq!(generator.num_parameters(), 0);
        assert!(generator.parameter_shapes().is_empty());

        let mut rng = StdRng::seed_from_u64(3);
        let real = Array2::from_elem((2000, 2), 5.0);
        let fake = generator.sample(&real, &mut rng);
        let offset = &fake - &real;
        let mean = offset.mean().unwrap();
        let var = offset.mapv(|v| (v - mean) * (v - mean)).mean().unwrap();
        assert!(mean.abs() < 0.1);
        assert!((var - 1.0).abs() < 0.1);
        assert!(generator.sample_traced(4, &mut rng).is_none());
    }
}
