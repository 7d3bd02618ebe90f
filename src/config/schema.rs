//! Run configuration schema
//!
//! The configuration is resolved once at process start (defaults, then an
//! optional YAML file, then command-line flags) and is never mutated while
//! training.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::validate::ConfigError;

/// Adversarial training flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GanMode {
    /// Original WGAN: RMSProp plus critic weight clipping, no penalty
    #[serde(rename = "wgan")]
    Wgan,
    /// WGAN with a Lipschitz penalty term and Adam
    #[default]
    #[serde(rename = "wgan-gp")]
    WganGp,
}

impl GanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GanMode::Wgan => "wgan",
            GanMode::WganGp => "wgan-gp",
        }
    }

    /// Whether the critic objective carries a penalty term
    pub fn uses_penalty(&self) -> bool {
        matches!(self, GanMode::WganGp)
    }
}

impl FromStr for GanMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wgan" => Ok(GanMode::Wgan),
            "wgan-gp" => Ok(GanMode::WganGp),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for GanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthetic 2-D distribution to train against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatasetKind {
    /// Eight Gaussians on a circle of radius 2
    #[default]
    #[serde(rename = "8gaussians")]
    EightGaussians,
    /// 5x5 grid of Gaussians, served from a shuffled finite pool
    #[serde(rename = "25gaussians")]
    TwentyFiveGaussians,
    /// Swiss roll projected onto its first and third coordinates
    #[serde(rename = "swissroll")]
    SwissRoll,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::EightGaussians => "8gaussians",
            DatasetKind::TwentyFiveGaussians => "25gaussians",
            DatasetKind::SwissRoll => "swissroll",
        }
    }
}

impl FromStr for DatasetKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "8gaussians" => Ok(DatasetKind::EightGaussians),
            "25gaussians" => Ok(DatasetKind::TwentyFiveGaussians),
            "swissroll" => Ok(DatasetKind::SwissRoll),
            _ => Err(ConfigError::UnknownDataset(s.to_string())),
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which Lipschitz penalty the critic objective carries in `wgan-gp` mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenaltyMode {
    /// Gradient norm at random interpolates
    #[default]
    Grad,
    /// Score difference over real/fake distance ratio
    Pagan,
    /// Score difference bounded by the transport cost
    Ot,
}

impl PenaltyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PenaltyMode::Grad => "grad",
            PenaltyMode::Pagan => "pagan",
            PenaltyMode::Ot => "ot",
        }
    }
}

impl FromStr for PenaltyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grad" => Ok(PenaltyMode::Grad),
            "pagan" => Ok(PenaltyMode::Pagan),
            "ot" => Ok(PenaltyMode::Ot),
            _ => Err(ConfigError::UnknownPenaltyMode(s.to_string())),
        }
    }
}

impl fmt::Display for PenaltyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete, immutable description of one training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// `wgan` or `wgan-gp`
    pub mode: GanMode,
    /// Target distribution
    pub dataset: DatasetKind,
    /// Hidden layer width of both networks
    pub dim: usize,
    /// Critic updates per generator update
    pub critic_iters: usize,
    /// Hold the generator at real data plus unit Gaussian noise
    pub fixed_generator: bool,
    /// Points per batch
    pub batch_size: usize,
    /// Outer iterations
    pub iters: usize,
    /// Weight of the penalty term in the critic loss
    pub penalty_weight: f32,
    /// Only penalize slopes above one (gradient penalty only)
    pub one_sided: bool,
    /// Penalty formulation
    pub penalty_mode: PenaltyMode,
    /// Output directory; must not exist before the run
    pub log_dir: PathBuf,
    /// Device selector, recorded for reference
    pub gpu: u32,
    /// RNG seed; drawn from OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            mode: GanMode::WganGp,
            dataset: DatasetKind::EightGaussians,
            dim: 512,
            critic_iters: 5,
            fixed_generator: false,
            batch_size: 256,
            iters: 100_000,
            penalty_weight: 0.1,
            one_sided: true,
            penalty_mode: PenaltyMode::Grad,
            log_dir: PathBuf::from("toy_log_default"),
            gpu: 0,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = TrainingConfig::default();
        assert_eq!(config.mode, GanMode::WganGp);
        assert_eq!(config.dataset, DatasetKind::EightGaussians);
        assert_eq!(config.dim, 512);
        assert_eq!(config.critic_iters, 5);
        assert_eq!(config.batch_size, 256);
        assert_eq!(config.iters, 100_000);
        assert!((config.penalty_weight - 0.1).abs() < 1e-7);
        assert!(config.one_sided);
        assert_eq!(config.penalty_mode, PenaltyMode::Grad);
    }

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in [GanMode::Wgan, GanMode::WganGp] {
            assert_eq!(mode.as_str().parse::<GanMode>().unwrap(), mode);
        }
        assert!(GanMode::WganGp.uses_penalty());
        assert!(!GanMode::Wgan.uses_penalty());
    }

    #[test]
    fn test_unknown_strings_are_config_errors() {
        assert!(matches!(
            "bogus".parse::<DatasetKind>(),
            Err(ConfigError::UnknownDataset(s)) if s == "bogus"
        ));
        assert!(matches!(
            "bogus".parse::<PenaltyMode>(),
            Err(ConfigError::UnknownPenaltyMode(s)) if s == "bogus"
        ));
        assert!(matches!("gan".parse::<GanMode>(), Err(ConfigError::UnknownMode(_))));
    }

    #[test]
    fn test_dataset_names() {
        assert_eq!("8gaussians".parse::<DatasetKind>().unwrap(), DatasetKind::EightGaussians);
        assert_eq!("25gaussians".parse::<DatasetKind>().unwrap(), DatasetKind::TwentyFiveGaussians);
        assert_eq!("swissroll".parse::<DatasetKind>().unwrap(), DatasetKind::SwissRoll);
        assert_eq!(DatasetKind::SwissRoll.to_string(), "swissroll");
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let json = serde_json::to_value(TrainingConfig::default()).unwrap();
        assert_eq!(json["mode"], "wgan-gp");
        assert_eq!(json["dataset"], "8gaussians");
        assert_eq!(json["penalty_mode"], "grad");
    }
}
