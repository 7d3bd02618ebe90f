//! Weight clipping for the original WGAN critic

use ndarray::ArrayViewMutD;

/// Box every critic parameter is clamped into after each `wgan` update
pub const WEIGHT_CLIP_BOUNDS: (f32, f32) = (-0.01, 0.01);

/// Clamp every entry of every parameter into `[lo, hi]`
///
/// Returns the number of entries that were outside the box.
pub fn clip_weights(params: &mut [ArrayViewMutD<'_, f32>], lo: f32, hi: f32) -> usize {
    let mut clipped = 0;
    for param in params.iter_mut() {
        param.map_inplace(|w| {
            if *w < lo || *w > hi {
                clipped += 1;
                *w = w.clamp(lo, hi);
            }
        });
    }
    clipped
}
