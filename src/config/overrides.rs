//! Layered configuration: defaults, then a YAML file, then command-line flags

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::schema::TrainingConfig;
use super::validate::{validate_config, ConfigError};

/// Partial configuration; every present field replaces the base value
///
/// String-valued selectors stay strings until [`ConfigOverrides::apply`] so
/// that unknown names surface as [`ConfigError`]s whether they come from a
/// file or from a flag.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub mode: Option<String>,
    pub dataset: Option<String>,
    pub dim: Option<usize>,
    pub critic_iters: Option<usize>,
    pub fixed_generator: Option<bool>,
    pub batch_size: Option<usize>,
    pub iters: Option<usize>,
    pub penalty_weight: Option<f32>,
    pub one_sided: Option<bool>,
    pub penalty_mode: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub gpu: Option<u32>,
    pub seed: Option<u64>,
}

impl ConfigOverrides {
    /// Layer `other` on top of `self`; fields set in `other` win
    #[must_use]
    pub fn merge(self, other: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            mode: other.mode.or(self.mode),
            dataset: other.dataset.or(self.dataset),
            dim: other.dim.or(self.dim),
            critic_iters: other.critic_iters.or(self.critic_iters),
            fixed_generator: other.fixed_generator.or(self.fixed_generator),
            batch_size: other.batch_size.or(self.batch_size),
            iters: other.iters.or(self.iters),
            penalty_weight: other.penalty_weight.or(self.penalty_weight),
            one_sided: other.one_sided.or(self.one_sided),
            penalty_mode: other.penalty_mode.or(self.penalty_mode),
            log_dir: other.log_dir.or(self.log_dir),
            gpu: other.gpu.or(self.gpu),
            seed: other.seed.or(self.seed),
        }
    }

    /// Apply the overrides to a base configuration
    pub fn apply(&self, base: TrainingConfig) -> Result<TrainingConfig, ConfigError> {
        let mut config = base;
        if let Some(mode) = &self.mode {
            config.mode = mode.parse()?;
        }
        if let Some(dataset) = &self.dataset {
            config.dataset = dataset.parse()?;
        }
        if let Some(penalty_mode) = &self.penalty_mode {
            config.penalty_mode = penalty_mode.parse()?;
        }
        if let Some(dim) = self.dim {
            config.dim = dim;
        }
        if let Some(critic_iters) = self.critic_iters {
            config.critic_iters = critic_iters;
        }
        if let Some(fixed_generator) = self.fixed_generator {
            config.fixed_generator = fixed_generator;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(iters) = self.iters {
            config.iters = iters;
        }
        if let Some(penalty_weight) = self.penalty_weight {
            config.penalty_weight = penalty_weight;
        }
        if let Some(one_sided) = self.one_sided {
            config.one_sided = one_sided;
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir = log_dir.clone();
        }
        if let Some(gpu) = self.gpu {
            config.gpu = gpu;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// Load overrides from a YAML file
pub fn load_overrides<P: AsRef<Path>>(path: P) -> Result<ConfigOverrides, ConfigError> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| ConfigError::ConfigFile {
        path: path.to_path_buf(),
        message: format!("failed to read: {e}"),
    })?;
    serde_yaml::from_str(&yaml).map_err(|e| ConfigError::ConfigFile {
        path: path.to_path_buf(),
        message: format!("failed to parse YAML: {e}"),
    })
}

/// Resolve the run configuration from an optional file and flag overrides,
/// then validate it
pub fn resolve_config(
    file: Option<&Path>,
    flags: ConfigOverrides,
) -> Result<TrainingConfig, ConfigError> {
    let layered = match file {
        Some(path) => load_overrides(path)?.merge(flags),
        None => flags,
    };
    let config = layered.apply(TrainingConfig::default())?;
    validate_config(&config)?;
    Ok(config)
}
