//! Result of one critic update.

/// Losses observed during a critic update, before the parameters moved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticStep {
    /// Full critic loss
    pub loss: f32,
    /// `mean(critic(fake)) - mean(critic(real))`
    pub wasserstein: f32,
    /// Unweighted penalty value (`wgan-gp` only)
    pub penalty: Option<f32>,
}
