//! wgan-toy: Wasserstein GANs on two-dimensional toy distributions
//!
//! A small generator and critic, both ReLU multilayer perceptrons, are
//! trained against one of three synthetic distributions (eight Gaussians on
//! a circle, a 5x5 Gaussian grid, a swiss roll). The critic is kept
//! approximately 1-Lipschitz either by weight clipping (`wgan`) or by one of
//! three penalty terms (`wgan-gp`):
//!
//! - `grad`: gradient norm at random interpolates, optionally one-sided
//! - `pagan`: score difference over real/fake distance
//! - `ot`: score difference bounded by the transport cost
//!
//! Every run writes its settings, a metrics log, loss curves and SVG frames
//! of the critic surface into a fresh log directory.
//!
//! # Modules
//!
//! - [`config`]: run configuration, YAML/flag layering, validation
//! - [`data`]: infinite batch streams for the toy distributions
//! - [`nn`]: MLP layers with hand-written backward passes
//! - [`penalty`]: Lipschitz penalties and their adjoints
//! - [`objective`]: critic and generator losses
//! - [`optim`]: Adam, RMSProp and weight clipping
//! - [`generative`]: the WGAN model itself
//! - [`train`]: the alternating training loop
//! - [`monitor`]: metrics log and storage
//! - [`viz`]: critic contour frames and loss curves
//! - [`cli`]: command-line entry points

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod generative;
pub mod monitor;
pub mod nn;
pub mod objective;
pub mod optim;
pub mod penalty;
pub mod train;
pub mod viz;

pub use error::{Error, Result};
