//! Shared test helpers for optimizer convergence tests
//!
//! - Quadratic convergence (convex, optimal solution at origin)
//! - Monotone loss decrease on a 1-D bowl
//! - Bilinear saddle, the smallest two-player game

use crate::optim::Optimizer;
use ndarray::{arr1, Array1};

/// Run `iterations` steps of `optimizer` on f(x) = Σ x², return the final point
pub fn run_quadratic<O: Optimizer>(optimizer: &mut O, start: &[f32], iterations: usize) -> Array1<f32> {
    let mut params = arr1(start);

    for _ in 0..iterations {
        // grad(x^2) = 2x
        let grad = params.mapv(|x| 2.0 * x);
        optimizer.step(&mut [params.view_mut().into_dyn()], &[grad.view().into_dyn()]);
    }

    params
}

/// Test that optimizer converges on f(x) = x^2
pub fn test_quadratic_convergence<O: Optimizer>(
    mut optimizer: O,
    iterations: usize,
    threshold: f32,
) -> bool {
    run_quadratic(&mut optimizer, &[3.0, -2.0, 1.5, -2.5], iterations)
        .iter()
        .all(|&val| val.abs() < threshold)
}

/// Test that optimizer decreases loss monotonically
pub fn test_loss_decreases<O: Optimizer>(mut optimizer: O, iterations: usize) -> bool {
    let mut params = arr1(&[10.0f32]);
    let mut prev_loss = f32::INFINITY;

    for _ in 0..iterations {
        let x = params[0];
        let loss = x * x;
        if loss > prev_loss + 1e-3 {
            return false;
        }
        prev_loss = loss;

        let grad = arr1(&[2.0 * x]);
        optimizer.step(&mut [params.view_mut().into_dyn()], &[grad.view().into_dyn()]);
    }

    true
}

/// Alternate updates on min_x max_y x*y, return the distance from the saddle
///
/// Each player owns its own optimizer, as the generator and critic do.
pub fn run_bilinear_game<O: Optimizer>(mut player_x: O, mut player_y: O, iterations: usize) -> f32 {
    let mut x = arr1(&[1.0f32]);
    let mut y = arr1(&[1.0f32]);

    for _ in 0..iterations {
        // y ascends x*y, expressed as descent on -x*y
        let gy = arr1(&[-x[0]]);
        player_y.step(&mut [y.view_mut().into_dyn()], &[gy.view().into_dyn()]);
        let gx = arr1(&[y[0]]);
        player_x.step(&mut [x.view_mut().into_dyn()], &[gx.view().into_dyn()]);
    }

    (x[0] * x[0] + y[0] * y[0]).sqrt()
}
