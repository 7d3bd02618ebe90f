//! Critic and generator losses, and their cotangents on the critic scores
//!
//! critic_loss    = mean(critic(fake)) - mean(critic(real)) + λ·penalty
//! generator_loss = -mean(critic(fake))

use ndarray::Array1;

use crate::penalty::{PenaltyAdjoint, PenaltyAssessment};

/// Wasserstein estimate part of the critic loss
pub fn wasserstein_gap(real_scores: &Array1<f32>, fake_scores: &Array1<f32>) -> f32 {
    fake_scores.mean().unwrap_or(0.0) - real_scores.mean().unwrap_or(0.0)
}

/// Critic loss; `penalty` is `(weight, value)` and absent in `wgan` mode
pub fn critic_loss(real_scores: &Array1<f32>, fake_scores: &Array1<f32>, penalty: Option<(f32, f32)>) -> f32 {
    let gap = wasserstein_gap(real_scores, fake_scores);
    match penalty {
        Some((weight, value)) => gap + weight * value,
        None => gap,
    }
}

pub fn generator_loss(fake_scores: &Array1<f32>) -> f32 {
    -fake_scores.mean().unwrap_or(0.0)
}

/// Cotangent of [`generator_loss`] on the fake scores
pub fn generator_cotangent(n: usize) -> Array1<f32> {
    Array1::from_elem(n, -1.0 / n.max(1) as f32)
}

/// Everything one critic update needs to backpropagate
#[derive(Debug, Clone)]
pub struct CriticObjective {
    /// Full critic loss
    pub loss: f32,
    /// `mean(critic(fake)) - mean(critic(real))`
    pub wasserstein: f32,
    /// Unweighted penalty value, when a penalty is active
    pub penalty: Option<f32>,
    /// Cotangent on the real scores, penalty score terms merged in
    pub real_cotangent: Array1<f32>,
    /// Cotangent on the fake scores, penalty score terms merged in
    pub fake_cotangent: Array1<f32>,
    /// Weighted cotangent on the critic input gradient (gradient penalty only)
    pub slope_adjoint: Option<PenaltyAdjoint>,
}

impl CriticObjective {
    /// Assemble the loss and cotangents from the critic scores
    ///
    /// The penalty weight is applied here and nowhere else.
    pub fn assemble(
        real_scores: &Array1<f32>,
        fake_scores: &Array1<f32>,
        penalty: Option<(f32, PenaltyAssessment)>,
    ) -> Self {
        let wasserstein = wasserstein_gap(real_scores, fake_scores);
        let mut real_cotangent = Array1::from_elem(real_scores.len(), -1.0 / real_scores.len().max(1) as f32);
        let mut fake_cotangent = Array1::from_elem(fake_scores.len(), 1.0 / fake_scores.len().max(1) as f32);

        let Some((weight, assessment)) = penalty else {
            return Self {
                loss: wasserstein,
                wasserstein,
                penalty: None,
                real_cotangent,
                fake_cotangent,
                slope_adjoint: None,
            };
        };

        let value = assessment.value;
        let slope_adjoint = match assessment.adjoint.scaled(weight) {
            PenaltyAdjoint::Scores { real, fake } => {
                real_cotangent += &real;
                fake_cotangent += &fake;
                None
            }
            slope @ PenaltyAdjoint::Slope { .. } => Some(slope),
        };

        Self {
            loss: wasserstein + weight * value,
            wasserstein,
            penalty: Some(value),
            real_cotangent,
            fake_cotangent,
            slope_adjoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};

    #[test]
    fn test_losses() {
        let real = array![1.0, 3.0];
        let fake = array![-1.0, 0.0];
        assert_abs_diff_eq!(critic_loss(&real, &fake, None), -2.5, epsilon = 1e-6);
        assert_abs_diff_eq!(critic_loss(&real, &fake, Some((0.1, 4.0))), -2.1, epsilon = 1e-6);
        assert_abs_diff_eq!(generator_loss(&fake), 0.5, epsilon = 1e-6);
        assert_eq!(generator_cotangent(4), array![-0.25, -0.25, -0.25, -0.25]);
    }

    #[test]
    fn test_assemble_without_penalty() {
        let objective = CriticObjective::assemble(&array![1.0, 3.0], &array![-1.0, 0.0], None);
        assert_abs_diff_eq!(objective.loss, -2.5, epsilon = 1e-6);
        assert_eq!(objective.penalty, None);
        assert_eq!(objective.real_cotangent, array![-0.5, -0.5]);
        assert_eq!(objective.fake_cotangent, array![0.5, 0.5]);
        assert!(objective.slope_adjoint.is_none());
    }

    #[test]
    fn test_assemble_merges_weighted_score_adjoint() {
        let assessment = PenaltyAssessment {
            value: 2.0,
            per_sample: array![4.0, 0.0],
            adjoint: PenaltyAdjoint::Scores { real: array![1.0, 0.0], fake: array![-1.0, 0.0] },
        };
        let objective =
            CriticObjective::assemble(&array![0.0, 0.0], &array![0.0, 0.0], Some((0.5, assessment)));
        assert_abs_diff_eq!(objective.loss, 1.0, epsilon = 1e-6);
        assert_eq!(objective.penalty, Some(2.0));
        assert_eq!(objective.real_cotangent, array![0.0, -0.5]);
        assert_eq!(objective.fake_cotangent, array![0.0, 0.5]);
        assert!(objective.slope_adjoint.is_none());
    }

    #[test]
    fn test_assemble_keeps_weighted_slope_adjoint() {
        let assessment = PenaltyAssessment {
            value: 1.0,
            per_sample: array![1.0],
            adjoint: PenaltyAdjoint::Slope {
                interpolates: Array2::zeros((1, 2)),
                cotangent: array![[2.0, -4.0]],
            },
        };
        let objective = CriticObjective::assemble(&array![1.0], &array![1.0], Some((0.1, assessment)));
        assert_eq!(objective.real_cotangent, array![-1.0]);
        match objective.slope_adjoint {
            Some(PenaltyAdjoint::Slope { cotangent, .. }) => {
                assert_abs_diff_eq!(cotangent[[0, 0]], 0.2, epsilon = 1e-6);
                assert_abs_diff_eq!(cotangent[[0, 1]], -0.4, epsilon = 1e-6);
            }
            other => panic!("unexpected adjoint {other:?}"),
        }
    }
}
