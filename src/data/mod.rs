//! Synthetic 2-D data sources
//!
//! Each source is an infinite, lazily generated sequence of `batch_size x 2`
//! point batches drawn from one of three toy distributions:
//!
//! - `8gaussians`: eight tight Gaussians on a circle of radius 2
//! - `25gaussians`: a 5x5 grid of Gaussians, served from a finite shuffled pool
//! - `swissroll`: a noisy swiss roll projected onto the plane
//!
//! The sequence can only be restarted by building a new source.

mod eight_gaussians;
mod grid;
mod swiss_roll;


use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, DatasetKind};

pub use eight_gaussians::{eight_centers, EIGHT_NOISE_STD, EIGHT_NORMALIZER, EIGHT_SCALE};
pub use grid::{GridPool, GRID_NOISE_STD, GRID_NORMALIZER, GRID_POOL_LEN, GRID_REPEATS};
pub use swiss_roll::{SWISS_NOISE, SWISS_NORMALIZER};

/// A batch of 2-D points, one point per row
pub type Batch = Array2<f32>;

/// Infinite supply of real data batches
pub trait BatchSource {
    /// Produce the next batch; always exactly `batch_size()` rows
    fn next_batch(&mut self) -> Batch;

    /// Rows per batch
    fn batch_size(&self) -> usize;
}

enum Sampler {
    EightGaussians,
    Grid(GridPool),
    SwissRoll,
}

/// Batch generator for one of the toy distributions
pub struct DataSource {
    batch_size: usize,
    sampler: Sampler,
    rng: StdRng,
}

impl DataSource {
    /// Create a data source with a seed for reproducibility
    ///
    /// The 25-gaussian pool is built and shuffled here, once.
    pub fn new(kind: DatasetKind, batch_size: usize, seed: u64) -> Result<Self, ConfigError> {
        if batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize(batch_size));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let sampler = match kind {
            DatasetKind::EightGaussians => Sampler::EightGaussians,
            DatasetKind::TwentyFiveGaussians => {
                if batch_size > GRID_POOL_LEN {
                    return Err(ConfigError::BatchLargerThanPool {
                        batch_size,
                        pool: GRID_POOL_LEN,
                    });
                }
                Sampler::Grid(GridPool::new(&mut rng))
            }
            DatasetKind::SwissRoll => Sampler::SwissRoll,
        };
        Ok(Self { batch_size, sampler, rng })
    }
}

impl BatchSource for DataSource {
    fn next_batch(&mut self) -> Batch {
        match &mut self.sampler {
            Sampler::EightGaussians => eight_gaussians::sample(&mut self.rng, self.batch_size),
            Sampler::Grid(pool) => pool.next_slice(self.batch_size),
            Sampler::SwissRoll => swiss_roll::sample(&mut self.rng, self.batch_size),
        }
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl Iterator for DataSource {
    type Item = Batch;

    fn next(&mut self) -> Option<Batch> {
        Some(self.next_batch())
    }
}
