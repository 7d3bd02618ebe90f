//! Periodic metric averaging with console, file and curve output

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{log, LogLevel};
use crate::error::Result;
use crate::viz::render_curve;

use super::storage::{JsonFileStore, MetricsStore};
use super::{Metric, MetricRecord, MetricStats};

/// Name of the flushed-averages file inside the log directory
pub const METRICS_FILE: &str = "metrics.json";

/// Scalar metric log with a tick counter
///
/// One value per metric per tick is kept; plotting twice within a tick
/// overwrites. Each flush averages the values since the previous flush.
pub struct MetricsLog<S: MetricsStore = JsonFileStore> {
    store: S,
    curve_dir: Option<PathBuf>,
    level: LogLevel,
    iteration: usize,
    since_last_flush: BTreeMap<Metric, BTreeMap<usize, f64>>,
    since_beginning: BTreeMap<Metric, BTreeMap<usize, f64>>,
    last_flush: Instant,
}

impl MetricsLog<JsonFileStore> {
    /// Log writing `metrics.json` and the curves into `log_dir`
    pub fn create(log_dir: &Path, level: LogLevel) -> Result<Self> {
        let store = JsonFileStore::create(log_dir.join(METRICS_FILE));
        Ok(Self::with_store(store, Some(log_dir.to_path_buf()), level))
    }
}

impl<S: MetricsStore> MetricsLog<S> {
    /// Log over any store; curves are only drawn when `curve_dir` is set
    pub fn with_store(store: S, curve_dir: Option<PathBuf>, level: LogLevel) -> Self {
        Self {
            store,
            curve_dir,
            level,
            iteration: 0,
            since_last_flush: BTreeMap::new(),
            since_beginning: BTreeMap::new(),
            last_flush: Instant::now(),
        }
    }

    /// Record `value` for the current tick
    pub fn plot(&mut self, metric: Metric, value: f32) {
        self.since_last_flush
            .entry(metric)
            .or_default()
            .insert(self.iteration, f64::from(value));
    }

    /// Advance to the next tick
    pub fn tick(&mut self) {
        self.iteration += 1;
    }

    /// Current tick
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Every value recorded for `metric`, by tick, including unflushed ones
    pub fn history(&self, metric: Metric) -> Vec<(usize, f64)> {
        let flushed = self.since_beginning.get(&metric).into_iter().flatten();
        let pending = self.since_last_flush.get(&metric).into_iter().flatten();
        let merged: BTreeMap<usize, f64> = flushed.chain(pending).map(|(&i, &v)| (i, v)).collect();
        merged.into_iter().collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Print and persist the averages since the last flush, redraw the curves
    ///
    /// Returns the records written; empty when nothing was plotted.
    pub fn flush(&mut self) -> Result<Vec<MetricRecord>> {
        let pending = std::mem::take(&mut self.since_last_flush);
        let mut records = Vec::with_capacity(pending.len());
        let mut prints = Vec::with_capacity(pending.len());

        for (metric, values) in pending {
            let mean = values.values().sum::<f64>() / values.len() as f64;
            prints.push(format!("{metric}\t{mean:.6}"));
            records.push(MetricRecord::new(metric, mean).at_iteration(self.iteration));
            self.since_beginning.entry(metric).or_default().extend(values);
        }

        if records.is_empty() {
            return Ok(records);
        }

        log(self.level, LogLevel::Normal, &format!("iter {}\t{}", self.iteration, prints.join("\t")));
        log(
            self.level,
            LogLevel::Verbose,
            &format!("  {:.2}s since last flush", self.last_flush.elapsed().as_secs_f64()),
        );
        self.last_flush = Instant::now();

        self.store.write_batch(&records)?;
        self.store.flush()?;

        if let Some(dir) = &self.curve_dir {
            for &metric in self.since_beginning.keys() {
                render_curve(&dir.join(metric.curve_file_name()), metric.as_str(), &self.history(metric))?;
            }
        }

        Ok(records)
    }

    /// Statistics of the flushed averages of every metric that has any
    pub fn summary(&self) -> Result<Vec<(Metric, MetricStats)>> {
        let mut summary = Vec::new();
        for metric in Metric::ALL {
            if let Some(stats) = self.store.query_stats(&metric)? {
                summary.push((metric, stats));
            }
        }
        Ok(summary)
    }
}
