//! CLI types - Cli, Command, and the run arguments

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::overrides::ConfigOverrides;

/// wgan-toy: WGAN / WGAN-GP on 2-D toy distributions
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "wgan-toy")]
#[command(version)]
#[command(about = "Train a toy WGAN critic/generator pair and plot the critic surface")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Train and write settings, metrics and frames to the log directory
    Train(RunArgs),

    /// Resolve and validate a configuration without training
    Validate(RunArgs),
}

/// Run configuration flags shared by `train` and `validate`
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct RunArgs {
    /// Optional YAML file with base settings (flags override it)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Training flavor: wgan or wgan-gp
    #[arg(long)]
    pub mode: Option<String>,

    /// Distribution: 8gaussians, 25gaussians or swissroll
    #[arg(long)]
    pub dataset: Option<String>,

    /// Hidden layer width
    #[arg(long)]
    pub dim: Option<usize>,

    /// Critic updates per generator update
    #[arg(long)]
    pub critic_iters: Option<usize>,

    /// Hold the generator at real data plus Gaussian noise
    #[arg(long)]
    pub fixed_generator: bool,

    /// Points per batch
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Outer training iterations
    #[arg(short, long)]
    pub iters: Option<usize>,

    /// Weight of the penalty term
    #[arg(long)]
    pub penalty_weight: Option<f32>,

    /// Only penalize slopes above one (grad penalty only)
    #[arg(long)]
    pub one_sided: Option<bool>,

    /// Penalty formulation: grad, pagan or ot
    #[arg(long)]
    pub penalty_mode: Option<String>,

    /// Output directory (must not exist)
    #[arg(short, long)]
    pub log_dir: Option<PathBuf>,

    /// Device selector, recorded in the settings
    #[arg(long)]
    pub gpu: Option<u32>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RunArgs {
    /// Flags as configuration overrides
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mode: self.mode.clone(),
            dataset: self.dataset.clone(),
            dim: self.dim,
            critic_iters: self.critic_iters,
            fixed_generator: self.fixed_generator.then_some(true),
            batch_size: self.batch_size,
            iters: self.iters,
            penalty_weight: self.penalty_weight,
            one_sided: self.one_sided,
            penalty_mode: self.penalty_mode.clone(),
            log_dir: self.log_dir.clone(),
            gpu: self.gpu,
            seed: self.seed,
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
