//! Configuration validation
//!
//! Validates run configurations before any training step executes.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ConfigError;
pub use validator::{ensure_fresh_log_dir, validate_config};
