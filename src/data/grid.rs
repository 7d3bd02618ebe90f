//! 25 Gaussians on a 5x5 grid, served from a finite shuffled pool

use ndarray::{s, Array2};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::StandardNormal;

use super::Batch;

/// Copies of the 5x5 grid in the pool
pub const GRID_REPEATS: usize = 100_000 / 25;
/// Total points in the pool
pub const GRID_POOL_LEN: usize = GRID_REPEATS * 25;
/// Per-coordinate noise standard deviation, before normalization
pub const GRID_NOISE_STD: f32 = 0.05;
/// Every coordinate is divided by this after shuffling
pub const GRID_NORMALIZER: f32 = 2.828;

/// Shuffled, normalized pool of grid points with a wrapping read cursor
#[derive(Debug, Clone)]
pub struct GridPool {
    points: Array2<f32>,
    cursor: usize,
}

impl GridPool {
    /// Build and shuffle the pool
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut raw: Vec<[f32; 2]> = Vec::with_capacity(GRID_POOL_LEN);
        for _ in 0..GRID_REPEATS {
            for x in -2i32..=2 {
                for y in -2i32..=2 {
                    let noise_x: f32 = rng.sample(StandardNormal);
                    let noise_y: f32 = rng.sample(StandardNormal);
                    raw.push([
                        noise_x * GRID_NOISE_STD + 2.0 * x as f32,
                        noise_y * GRID_NOISE_STD + 2.0 * y as f32,
                    ]);
                }
            }
        }
        raw.shuffle(rng);

        let points = Array2::from_shape_fn((raw.len(), 2), |(i, j)| raw[i][j] / GRID_NORMALIZER);
        Self { points, cursor: 0 }
    }

    /// Number of points in the pool
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    /// The whole shuffled pool
    pub fn points(&self) -> &Array2<f32> {
        &self.points
    }

    /// Next non-overlapping slice; wraps to the start when fewer than
    /// `batch_size` points remain
    ///
    /// `batch_size` must not exceed the pool length.
    pub fn next_slice(&mut self, batch_size: usize) -> Batch {
        if self.cursor + batch_size > self.len() {
            self.cursor = 0;
        }
        let batch = self.points.slice(s![self.cursor..self.cursor + batch_size, ..]).to_owned();
        self.cursor += batch_size;
        batch
    }
}
