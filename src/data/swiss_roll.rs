//! Swiss roll projected onto its first and third coordinates

use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

use super::Batch;

/// Standard deviation of the Gaussian noise added to each 3-D coordinate
pub const SWISS_NOISE: f32 = 0.25;
/// Every kept coordinate is divided by this
pub const SWISS_NORMALIZER: f32 = 7.5;

pub(super) fn sample<R: Rng>(rng: &mut R, batch_size: usize) -> Batch {
    let mut batch = Array2::zeros((batch_size, 2));
    for mut row in batch.rows_mut() {
        let u: f32 = rng.random();
        let t = 1.5 * std::f32::consts::PI * (1.0 + 2.0 * u);
        let noise_x: f32 = rng.sample(StandardNormal);
        let noise_z: f32 = rng.sample(StandardNormal);
        // The height coordinate of the roll is dropped
        row[0] = (t * t.cos() + SWISS_NOISE * noise_x) / SWISS_NORMALIZER;
        row[1] = (t * t.sin() + SWISS_NOISE * noise_z) / SWISS_NORMALIZER;
    }
    batch
}
