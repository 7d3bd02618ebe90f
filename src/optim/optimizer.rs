//! Optimizer trait

use std::fmt;

use ndarray::{ArrayViewD, ArrayViewMutD};

/// Trait for optimization algorithms
///
/// `params` and `grads` are parallel lists (same length, same shapes), in the
/// order the owning network lists its parameters. Per-parameter state is
/// keyed by position, so an optimizer instance is bound to one parameter set.
/// `Display` renders the hyperparameters for the run log.
pub trait Optimizer: fmt::Display {
    /// Perform a single optimization step
    fn step(&mut self, params: &mut [ArrayViewMutD<'_, f32>], grads: &[ArrayViewD<'_, f32>]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, Zip};

    /// Minimal optimizer implementation for testing the trait contract
    struct TestOptimizer {
        learning_rate: f32,
    }

    impl Optimizer for TestOptimizer {
        fn step(&mut self, params: &mut [ArrayViewMutD<'_, f32>], grads: &[ArrayViewD<'_, f32>]) {
            for (param, grad) in params.iter_mut().zip(grads) {
                Zip::from(param).and(grad).for_each(|p, &g| *p -= self.learning_rate * g);
            }
        }
    }

    impl fmt::Display for TestOptimizer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "SGD(lr={})", self.learning_rate)
        }
    }

    #[test]
    fn test_optimizer_step_multiple_params() {
        let mut opt = TestOptimizer { learning_rate: 0.1 };
        let mut p1 = arr1(&[1.0f32, 2.0]);
        let mut p2 = arr1(&[3.0f32, 4.0]);
        let g1 = arr1(&[0.5f32, 1.0]);
        let g2 = arr1(&[1.5f32, 2.0]);

        opt.step(
            &mut [p1.view_mut().into_dyn(), p2.view_mut().into_dyn()],
            &[g1.view().into_dyn(), g2.view().into_dyn()],
        );

        assert!((p1[0] - 0.95).abs() < 1e-6);
        assert!((p1[1] - 1.9).abs() < 1e-6);
        assert!((p2[0] - 2.85).abs() < 1e-6);
        assert!((p2[1] - 3.8).abs() < 1e-6);
    }

    #[test]
    fn test_optimizer_as_trait_object() {
        let mut opt: Box<dyn Optimizer> = Box::new(TestOptimizer { learning_rate: 0.5 });
        let mut p = arr1(&[1.0f32]);
        opt.step(&mut [p.view_mut().into_dyn()], &[arr1(&[1.0f32]).view().into_dyn()]);
        assert!((p[0] - 0.5).abs() < 1e-6);
        assert_eq!(opt.to_string(), "SGD(lr=0.5)");
    }
}
