//! Core Trainer struct and basic methods

use crate::cli::LogLevel;
use crate::data::BatchSource;
use crate::monitor::{JsonFileStore, MetricsLog, MetricsStore};
use crate::train::{AdversarialModel, FrameSink, Schedule};

/// Training loop state, constructed once per run
pub struct Trainer<M, S, F, L = JsonFileStore>
where
    M: AdversarialModel,
    S: BatchSource,
    F: FrameSink,
    L: MetricsStore,
{
    pub(crate) model: M,
    pub(crate) data: S,
    pub(crate) frames: F,
    pub(crate) metrics: MetricsLog<L>,
    pub(crate) schedule: Schedule,
    pub(crate) level: LogLevel,
}

impl<M, S, F, L> Trainer<M, S, F, L>
where
    M: AdversarialModel,
    S: BatchSource,
    F: FrameSink,
    L: MetricsStore,
{
    /// Create a new trainer
    pub fn new(model: M, data: S, frames: F, metrics: MetricsLog<L>, schedule: Schedule, level: LogLevel) -> Self {
        Self { model, data, frames, metrics, schedule, level }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn metrics(&self) -> &MetricsLog<L> {
        &self.metrics
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }
}
