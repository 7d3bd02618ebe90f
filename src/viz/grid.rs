//! Evaluation grid for the critic surface

use ndarray::Array2;

/// Points per grid axis
pub const GRID_SIZE: usize = 128;
/// The grid spans `[-GRID_LIMIT, GRID_LIMIT]` on both axes
pub const GRID_LIMIT: f32 = 3.0;

/// Square grid of 2-D points
///
/// Point `i * size + j` is `(axis[i], axis[j])`: the first coordinate
/// varies along rows, the second along columns.
#[derive(Debug, Clone)]
pub struct Grid {
    axis: Vec<f32>,
    points: Array2<f32>,
}

impl Grid {
    /// `size` evenly spaced values from `lo` to `hi` inclusive on each axis
    pub fn new(size: usize, lo: f32, hi: f32) -> Self {
        let step = if size > 1 { (hi - lo) / (size - 1) as f32 } else { 0.0 };
        let axis: Vec<f32> = (0..size).map(|i| lo + step * i as f32).collect();
        let points = Array2::from_shape_fn((size * size, 2), |(p, c)| {
            if c == 0 {
                axis[p / size]
            } else {
                axis[p % size]
            }
        });
        Self { axis, points }
    }

    /// 128x128 over `[-3, 3]²`
    pub fn standard() -> Self {
        Self::new(GRID_SIZE, -GRID_LIMIT, GRID_LIMIT)
    }

    pub fn axis(&self) -> &[f32] {
        &self.axis
    }

    pub fn size(&self) -> usize {
        self.axis.len()
    }

    /// All grid points, one per row
    pub fn points(&self) -> &Array2<f32> {
        &self.points
    }

    /// Arrange per-point values as `values[[i, j]] = f(axis[i], axis[j])`
    pub fn reshape(&self, values: &[f32]) -> Array2<f32> {
        let n = self.size();
        Array2::from_shape_fn((n, n), |(i, j)| values[i * n + j])
    }
}
