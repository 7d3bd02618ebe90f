//! Metrics store trait

use super::error::StorageResult;
use crate::monitor::{Metric, MetricRecord, MetricStats};

/// Destination of the flushed metric averages
pub trait MetricsStore: Send + Sync {
    /// Append records; they may stay buffered until [`MetricsStore::flush`]
    fn write_batch(&mut self, records: &[MetricRecord]) -> StorageResult<()>;

    /// Summary of every record of `metric`, `None` when there is none
    fn query_stats(&self, metric: &Metric) -> StorageResult<Option<MetricStats>>;

    /// Records held, all metrics together
    fn count(&self) -> StorageResult<usize>;

    /// Persist buffered records
    fn flush(&mut self) -> StorageResult<()>;
}
