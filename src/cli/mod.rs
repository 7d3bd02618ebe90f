//! CLI module for wgan-toy
//!
//! Command handlers and level-gated console output.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::{log, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
