//! Training metrics: named scalar series, averaged and flushed periodically
//!
//! Values are recorded with [`MetricsLog::plot`] during an iteration and the
//! iteration counter advances with [`MetricsLog::tick`]. A flush prints the
//! average of every series since the previous flush, appends one record per
//! series to `metrics.json` and redraws each series' curve.

mod log;
pub mod storage;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use log::{MetricsLog, METRICS_FILE};
pub use storage::{InMemoryStore, JsonFileStore, MetricsStore, StorageError, StorageResult};

/// Scalar series recorded during training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Critic loss of the last critic update of an iteration
    DiscCost,
    /// Generator loss
    GenCost,
    /// Unweighted penalty value of the last critic update
    Penalty,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::DiscCost, Metric::GenCost, Metric::Penalty];

    /// Display name, also the basis of the curve file name
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::DiscCost => "disc cost",
            Metric::GenCost => "gen cost",
            Metric::Penalty => "penalty",
        }
    }

    /// `disc cost` becomes `disc_cost.svg`
    pub fn curve_file_name(&self) -> String {
        format!("{}.svg", self.as_str().replace(' ', "_"))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flushed average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    /// Iteration the flush happened at
    pub iteration: usize,
    pub metric: Metric,
    pub value: f64,
}

impl MetricRecord {
    /// Record stamped with the current wall-clock time, at iteration 0
    pub fn new(metric: Metric, value: f64) -> Self {
        let timestamp = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        Self { timestamp, iteration: 0, metric, value }
    }

    #[must_use]
    pub fn at_iteration(mut self, iteration: usize) -> Self {
        self.iteration = iteration;
        self
    }
}

/// Summary statistics over the records of one metric
#[derive(Debug, Clone, PartialEq)]
pub struct MetricStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    /// Most recently written value
    pub last: f64,
}
