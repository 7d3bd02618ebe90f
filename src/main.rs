//! wgan-toy CLI
//!
//! # Usage
//!
//! ```bash
//! # Default run: wgan-gp with a one-sided gradient penalty on 8gaussians
//! wgan-toy train --log-dir runs/default
//!
//! # Original WGAN with weight clipping
//! wgan-toy train --mode wgan --dataset swissroll --log-dir runs/clip
//!
//! # Base settings from YAML, flags on top
//! wgan-toy train --config run.yaml --penalty-mode ot --iters 2000
//!
//! # Check a configuration without training
//! wgan-toy validate --config run.yaml -v
//! ```

use clap::Parser;
use std::process::ExitCode;
use wgan_toy::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
