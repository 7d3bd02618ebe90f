//! Generative adversarial models on 2-D toy data
//!
//! - Generator: maps Gaussian noise to points in the plane
//! - Discriminator: the critic, an unbounded real-valued score

pub mod wgan;

pub use wgan::{CriticStep, Discriminator, Generator, WassersteinGan, WganConfig, WganStats};
