//! Wasserstein GAN main struct and update logic.

mod stats;
mod step_result;
mod wasserstein_gan;


pub use stats::WganStats;
pub use step_result::CriticStep;
pub use wasserstein_gan::WassersteinGan;
