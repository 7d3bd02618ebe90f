//! Adversarial training loop
//!
//! Per outer iteration `t`:
//! - one generator update when `t > 0` (a no-op for a parameter-free generator)
//! - `critic_iters` critic updates, each on a fresh real batch
//! - the last critic loss is recorded as `disc cost`
//! - at `t == 10`, `t == 50` and every `t % 100 == 99`, metrics are flushed
//!   and a frame of the last critic batch is rendered
//!
//! # Example
//!
//! ```no_run
//! use wgan_toy::cli::LogLevel;
//! use wgan_toy::config::TrainingConfig;
//! use wgan_toy::train::run_training;
//!
//! let config = TrainingConfig { iters: 200, ..Default::default() };
//! let report = run_training(&config, LogLevel::Normal)?;
//! println!("{} critic updates, {} frames", report.critic_updates, report.frames);
//! # Ok::<(), wgan_toy::Error>(())
//! ```

mod model;
mod schedule;
mod session;
mod trainer;

#[cfg(test)]
mod tests;

pub use model::{AdversarialModel, FrameSink};
pub use schedule::{should_visualize, Schedule};
pub use session::{format_parameter, resolve_seed, run_training};
pub use trainer::{TrainReport, Trainer};
