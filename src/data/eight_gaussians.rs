//! Eight Gaussians on a circle

use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

use super::Batch;

/// Radius of the circle the centers sit on
pub const EIGHT_SCALE: f32 = 2.0;
/// Per-coordinate noise standard deviation, before normalization
pub const EIGHT_NOISE_STD: f32 = 0.02;
/// Every coordinate is divided by this so the cloud has roughly unit variance
pub const EIGHT_NORMALIZER: f32 = 1.414;

/// Centers before normalization: compass points and diagonals, scaled
pub fn eight_centers() -> [[f32; 2]; 8] {
    let d = std::f32::consts::FRAC_1_SQRT_2;
    [[1.0, 0.0], [-1.0, 0.0], [0.0, 1.0], [0.0, -1.0], [d, d], [d, -d], [-d, d], [-d, -d]]
        .map(|[x, y]| [EIGHT_SCALE * x, EIGHT_SCALE * y])
}

pub(super) fn sample<R: Rng>(rng: &mut R, batch_size: usize) -> Batch {
    let centers = eight_centers();
    let mut batch = Array2::zeros((batch_size, 2));
    for mut row in batch.rows_mut() {
        let noise_x: f32 = rng.sample(StandardNormal);
        let noise_y: f32 = rng.sample(StandardNormal);
        let center = centers[rng.random_range(0..centers.len())];
        row[0] = (noise_x * EIGHT_NOISE_STD + center[0]) / EIGHT_NORMALIZER;
        row[1] = (noise_y * EIGHT_NOISE_STD + center[1]) / EIGHT_NORMALIZER;
    }
    batch
}
