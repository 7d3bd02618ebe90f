//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! wgan-toy train --dataset 25gaussians --penalty-mode pagan --log-dir runs/pagan
//! wgan-toy train --config run.yaml --iters 2000
//! wgan-toy validate --mode wgan --dataset swissroll
//! ```

mod args;

pub use args::{parse_args, Cli, Command, RunArgs};

#[cfg(test)]
mod tests;
