//! Metrics storage
//!
//! Flushed metric averages live in memory or in a JSON file in the log
//! directory.

mod error;
mod in_memory;
mod json_file;
mod traits;

pub use error::{StorageError, StorageResult};
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use traits::MetricsStore;
