//! Lipschitz penalties on the critic
//!
//! Every penalty maps a real batch, a fake batch and a critic to a scalar.
//! Besides the value, [`Penalty::assess`] returns the adjoint the critic
//! update needs to train through the penalty.

use ndarray::{Array1, Array2, Axis, Zip};
use rand::Rng;

use crate::config::PenaltyMode;

/// Smallest distance the pagan ratio divides by
pub const MIN_DISTANCE: f32 = 1e-6;

/// Scoring capability the penalties need from a critic
pub trait Critic {
    /// One score per row of `points`
    fn score(&self, points: &Array2<f32>) -> Array1<f32>;

    /// Row `n` is the gradient of the score with respect to `points[n]`
    fn input_gradient(&self, points: &Array2<f32>) -> Array2<f32>;
}

/// Penalty formulation, resolved from the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    /// `(‖∇ critic(x̂)‖ - 1)²` at random interpolates; `one_sided` keeps only slopes above one
    Gradient { one_sided: bool },
    /// Score gap over real/fake distance, penalized above one
    Pagan,
    /// Score gap penalized where it exceeds the transport cost
    Transport,
}

/// Cotangent of the penalty value with respect to what the critic produced
#[derive(Debug, Clone, PartialEq)]
pub enum PenaltyAdjoint {
    /// Cotangent on the input gradients at `interpolates`
    Slope { interpolates: Array2<f32>, cotangent: Array2<f32> },
    /// Cotangents on the real and fake scores
    Scores { real: Array1<f32>, fake: Array1<f32> },
}

impl PenaltyAdjoint {
    /// Same adjoint multiplied by `factor`
    pub fn scaled(self, factor: f32) -> Self {
        match self {
            PenaltyAdjoint::Slope { interpolates, cotangent } => {
                PenaltyAdjoint::Slope { interpolates, cotangent: cotangent * factor }
            }
            PenaltyAdjoint::Scores { real, fake } => {
                PenaltyAdjoint::Scores { real: real * factor, fake: fake * factor }
            }
        }
    }
}

/// Penalty value with its per-sample terms and adjoint
#[derive(Debug, Clone, PartialEq)]
pub struct PenaltyAssessment {
    pub value: f32,
    pub per_sample: Array1<f32>,
    pub adjoint: PenaltyAdjoint,
}

impl Penalty {
    /// `one_sided` only matters for the gradient penalty
    pub fn from_config(mode: PenaltyMode, one_sided: bool) -> Self {
        match mode {
            PenaltyMode::Grad => Penalty::Gradient { one_sided },
            PenaltyMode::Pagan => Penalty::Pagan,
            PenaltyMode::Ot => Penalty::Transport,
        }
    }

    pub fn mode(&self) -> PenaltyMode {
        match self {
            Penalty::Gradient { .. } => PenaltyMode::Grad,
            Penalty::Pagan => PenaltyMode::Pagan,
            Penalty::Transport => PenaltyMode::Ot,
        }
    }

    /// Scalar penalty for one critic update
    pub fn evaluate<C, R>(&self, real: &Array2<f32>, fake: &Array2<f32>, critic: &C, rng: &mut R) -> f32
    where
        C: Critic + ?Sized,
        R: Rng,
    {
        self.assess(real, fake, critic, rng).value
    }

    /// Penalty value, per-sample terms and the adjoint of the mean
    ///
    /// `real` and `fake` must have the same number of rows. Only the
    /// gradient penalty consumes randomness.
    pub fn assess<C, R>(
        &self,
        real: &Array2<f32>,
        fake: &Array2<f32>,
        critic: &C,
        rng: &mut R,
    ) -> PenaltyAssessment
    where
        C: Critic + ?Sized,
        R: Rng,
    {
        match *self {
            Penalty::Gradient { one_sided } => gradient_penalty(real, fake, critic, rng, one_sided),
            Penalty::Pagan => score_gap_penalty(real, fake, critic, |gap, distance| {
                let safe = distance.max(MIN_DISTANCE);
                let excess = (gap.abs() / safe - 1.0).max(0.0);
                // d(excess)/d(gap); sign(0) is zero
                let slope = if gap > 0.0 {
                    1.0 / safe
                } else if gap < 0.0 {
                    -1.0 / safe
                } else {
                    0.0
                };
                (excess, slope)
            }),
            Penalty::Transport => {
                score_gap_penalty(real, fake, critic, |gap, distance| ((gap - distance).max(0.0), 1.0))
            }
        }
    }
}

/// Row-wise Euclidean norms
pub fn row_norms(points: &Array2<f32>) -> Array1<f32> {
    points.map_axis(Axis(1), |row| row.dot(&row).sqrt())
}

fn mean(values: &Array1<f32>) -> f32 {
    values.mean().unwrap_or(0.0)
}

fn gradient_penalty<C, R>(
    real: &Array2<f32>,
    fake: &Array2<f32>,
    critic: &C,
    rng: &mut R,
    one_sided: bool,
) -> PenaltyAssessment
where
    C: Critic + ?Sized,
    R: Rng,
{
    let n = real.nrows();
    let alpha = Array1::from_shape_fn(n, |_| rng.random::<f32>()).insert_axis(Axis(1));
    let beta = 1.0 - &alpha;
    let interpolates = &alpha * real + &beta * fake;

    let gradients = critic.input_gradient(&interpolates);
    let slopes = row_norms(&gradients);
    let excess = slopes.mapv(|s| if one_sided { (s - 1.0).max(0.0) } else { s - 1.0 });
    let per_sample = excess.mapv(|h| h * h);

    // d/dg of (1/N) Σ h(‖g‖)² is (2/N) h g / ‖g‖
    let scale = 2.0 / n.max(1) as f32;
    let mut cotangent = gradients;
    Zip::from(cotangent.rows_mut()).and(&slopes).and(&excess).for_each(|mut row, &s, &h| {
        if s > 0.0 {
            row *= scale * h / s;
        } else {
            row.fill(0.0);
        }
    });

    PenaltyAssessment {
        value: mean(&per_sample),
        per_sample,
        adjoint: PenaltyAdjoint::Slope { interpolates, cotangent },
    }
}

/// Shared shape of the pagan and transport penalties
///
/// `term(gap, distance)` returns the per-sample excess and its derivative
/// with respect to `gap = critic(real) - critic(fake)`.
fn score_gap_penalty<C, F>(
    real: &Array2<f32>,
    fake: &Array2<f32>,
    critic: &C,
    term: F,
) -> PenaltyAssessment
where
    C: Critic + ?Sized,
    F: Fn(f32, f32) -> (f32, f32),
{
    let n = real.nrows();
    let distances = row_norms(&(real - fake));
    let gaps = critic.score(real) - critic.score(fake);

    let scale = 2.0 / n.max(1) as f32;
    let mut per_sample = Array1::zeros(n);
    let mut real_cotangent = Array1::zeros(n);
    Zip::from(&mut per_sample)
        .and(&mut real_cotangent)
        .and(&gaps)
        .and(&distances)
        .for_each(|p, c, &gap, &distance| {
            let (excess, slope) = term(gap, distance);
            *p = excess * excess;
            *c = scale * excess * slope;
        });
    let fake_cotangent = -&real_cotangent;

    PenaltyAssessment {
        value: mean(&per_sample),
        per_sample,
        adjoint: PenaltyAdjoint::Scores { real: real_cotangent, fake: fake_cotangent },
    }
}
