//! In-memory metrics store implementation

use super::error::StorageResult;
use super::traits::MetricsStore;
use crate::monitor::{Metric, MetricRecord, MetricStats};

/// Summary statistics of a series, `None` when it is empty
pub(crate) fn stats_of(values: &[f64]) -> Option<MetricStats> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let variance = if count > 1 {
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64
    } else {
        0.0
    };

    Some(MetricStats {
        count,
        mean,
        std: variance.sqrt(),
        min,
        max,
        last: values[count - 1],
    })
}

pub(crate) fn select<'a>(
    records: &'a [MetricRecord],
    metric: &'a Metric,
) -> impl Iterator<Item = &'a MetricRecord> + 'a {
    records.iter().filter(move |r| &r.metric == metric)
}

/// In-memory metrics store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<MetricRecord>,
}

impl InMemoryStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }
}

impl MetricsStore for InMemoryStore {
    fn write_batch(&mut self, records: &[MetricRecord]) -> StorageResult<()> {
        self.records.extend(records.iter().cloned());
        Ok(())
    }

    fn query_stats(&self, metric: &Metric) -> StorageResult<Option<MetricStats>> {
        let values: Vec<f64> = select(&self.records, metric).map(|r| r.value).collect();
        Ok(stats_of(&values))
    }

    fn count(&self) -> StorageResult<usize> {
        Ok(self.records.len())
    }

    fn flush(&mut self) -> StorageResult<()> {
        Ok(())
    }
}
