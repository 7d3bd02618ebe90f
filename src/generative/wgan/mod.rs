//! Wasserstein GAN on 2-D points
//!
//! - Generator: maps N(0, I) noise to points, or perturbs the real batch
//! - Discriminator: scores points with an unbounded real value (the critic)
//!
//! # Architecture
//!
//! ```text
//! Noise z ~ N(0, I) ─► Generator ─► fake ─┬─► Discriminator ─► scores
//!                                         │
//!            Real batch ──────────────────┘
//! ```
//!
//! `wgan` trains both players with RMSProp and clips the critic weights;
//! `wgan-gp` trains with Adam and adds a Lipschitz penalty to the critic.

mod config;
mod discriminator;
mod gan;
mod generator;

pub use config::WganConfig;
pub use discriminator::Discriminator;
pub use gan::{CriticStep, WassersteinGan, WganStats};
pub use generator::Generator;
