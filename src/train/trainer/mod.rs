//! Trainer: drives an [`AdversarialModel`](crate::train::AdversarialModel)
//! over a [`BatchSource`](crate::data::BatchSource)
//!
//! Metrics go to a [`MetricsLog`](crate::monitor::MetricsLog) and frames to
//! a [`FrameSink`](crate::train::FrameSink); all three are generic so the
//! loop can be exercised against fakes.

mod core;
mod result;
mod train_loop;

pub use self::core::Trainer;
pub use result::TrainReport;
