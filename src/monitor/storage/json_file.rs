//! Metrics store backed by a pretty-printed JSON array

use std::path::{Path, PathBuf};

use super::error::StorageResult;
use super::in_memory::{select, stats_of};
use super::traits::MetricsStore;
use crate::monitor::{Metric, MetricRecord, MetricStats};

/// JSON file store for a fresh log directory
///
/// The whole record list is rewritten on every flush that follows a write.
/// A file already at `path` is replaced, never read.
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<MetricRecord>,
    dirty: bool,
}

impl JsonFileStore {
    /// Empty store writing to `path`; nothing touches the disk before a flush
    pub fn create<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf(), records: Vec::new(), dirty: false }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetricsStore for JsonFileStore {
    fn write_batch(&mut self, records: &[MetricRecord]) -> StorageResult<()> {
        self.records.extend(records.iter().cloned());
        self.dirty = true;
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
        if self.dirty {
            std::fs::write(&self.path, serde_json::to_string_pretty(&self.records)?)?;
            self.dirty = false;
        }
        Ok(())
    }
}

impl Drop for JsonFileStore {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
