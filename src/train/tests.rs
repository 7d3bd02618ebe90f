//! Training loop tests against fake collaborators

use super::*;
use crate::cli::LogLevel;
use crate::data::{Batch, BatchSource};
use crate::error::{Error, Result};
use crate::generative::CriticStep;
use crate::monitor::{InMemoryStore, Metric, MetricsLog, MetricsStore};
use ndarray::{Array1, Array2};

/// Counts calls; critic loss is scripted per critic call
#[derive(Default)]
struct FakeModel {
    has_generator: bool,
    generator_calls: usize,
    critic_calls: usize,
    /// Iteration-major log of calls: 'g' or 'c'
    calls: String,
    nan_at_critic_call: Option<usize>,
}

impl AdversarialModel for FakeModel {
    fn generator_step(&mut self) -> Option<f32> {
        self.generator_calls += 1;
        self.calls.push('g');
        self.has_generator.then_some(-0.5)
    }

    fn critic_step(&mut self, real: &Array2<f32>) -> CriticStep {
        assert_eq!(real.nrows(), 4);
        self.critic_calls += 1;
        self.calls.push('c');
        let loss = if self.nan_at_critic_call == Some(self.critic_calls) {
            f32::NAN
        } else {
            self.critic_calls as f32
        };
        CriticStep { loss, wasserstein: loss, penalty: Some(0.25) }
    }

    fn critic_scores(&self, points: &Array2<f32>) -> Array1<f32> {
        Array1::zeros(points.nrows())
    }

    fn sample(&mut self, real: &Array2<f32>) -> Array2<f32> {
        real.clone()
    }

    fn parameter_shapes(&self) -> Vec<(String, Vec<usize>)> {
        Vec::new()
    }
}

struct CountingSource {
    batches: usize,
}

impl BatchSource for CountingSource {
    fn next_batch(&mut self) -> Batch {
        self.batches += 1;
        Array2::from_elem((4, 2), self.batches as f32)
    }

    fn batch_size(&self) -> usize {
        4
    }
}

/// Records which iterations were rendered and the first value of the real batch
#[derive(Default)]
struct RecordingSink {
    rendered: Vec<(usize, f32)>,
}

impl FrameSink for RecordingSink {
    fn render<M: AdversarialModel>(&mut self, iteration: usize, real: &Array2<f32>, model: &mut M) -> Result<()> {
        assert_eq!(model.sample(real).dim(), real.dim());
        self.rendered.push((iteration, real[[0, 0]]));
        Ok(())
    }
}

type FakeTrainer = Trainer<FakeModel, CountingSource, RecordingSink, InMemoryStore>;

fn trainer(model: FakeModel, iters: usize, critic_iters: usize) -> FakeTrainer {
    Trainer::new(
        model,
        CountingSource { batches: 0 },
        RecordingSink::default(),
        MetricsLog::with_store(InMemoryStore::new(), None, LogLevel::Quiet),
        Schedule { iters, critic_iters },
        LogLevel::Quiet,
    )
}

#[test]
fn test_single_iteration_has_no_generator_step() {
    let mut trainer = trainer(FakeModel { has_generator: true, ..Default::default() }, 1, 1);
    let report = trainer.run().unwrap();
    assert_eq!(report.iterations, 1);
    assert_eq!(report.generator_steps, 0);
    assert_eq!(report.critic_updates, 1);
    assert_eq!(report.frames, 0);
    assert_eq!(trainer.model().calls, "c");
}

#[test]
fn test_call_order_and_counts() {
    let mut trainer = trainer(FakeModel { has_generator: true, ..Default::default() }, 3, 5);
    let report = trainer.run().unwrap();
    assert_eq!(trainer.model().calls, "cccccgcccccgccccc");
    assert_eq!(report.generator_steps, 2);
    assert_eq!(report.generator_updates, 2);
    assert_eq!(report.critic_updates, 15);
    assert_eq!(report.final_disc_cost, Some(15.0));
}

#[test]
fn test_fixed_generator_steps_are_noops() {
    let mut trainer = trainer(FakeModel::default(), 4, 2);
    let report = trainer.run().unwrap();
    assert_eq!(report.generator_steps, 3);
    assert_eq!(report.generator_updates, 0);
    assert_eq!(trainer.model().generator_calls, 3);
    assert!(trainer.metrics().history(Metric::GenCost).is_empty());
}

#[test]
fn test_frames_follow_schedule_with_last_batch() {
    let mut trainer = trainer(FakeModel::default(), 200, 2);
    let report = trainer.run().unwrap();
    assert_eq!(report.frames, 4);

    let iterations: Vec<usize> = trainer.frames().rendered.iter().map(|&(t, _)| t).collect();
    assert_eq!(iterations, vec![10, 50, 99, 199]);
    // Iteration t consumes batches 2t + 1 and 2t + 2; the frame shows the last one
    assert_eq!(trainer.frames().rendered[0].1, 22.0);
}

#[test]
fn test_flush_records_last_critic_loss_average() {
    let mut trainer = trainer(FakeModel::default(), 11, 2);
    trainer.run().unwrap();

    // Flush at t = 10 averages the last critic loss of iterations 0..=10: 2, 4, ..., 22
    let store = trainer.metrics().store();
    let stats = store.query_stats(&Metric::DiscCost).unwrap().unwrap();
    assert_eq!(stats.count, 1);
    assert!((stats.last - 12.0).abs() < 1e-9);
    assert_eq!(store.query_stats(&Metric::Penalty).unwrap().unwrap().count, 1);
    assert_eq!(store.count().unwrap(), 2);
    assert_eq!(trainer.metrics().iteration(), 11);
}

#[test]
fn test_non_finite_loss_aborts() {
    let model = FakeModel { nan_at_critic_call: Some(7), ..Default::default() };
    let mut trainer = trainer(model, 10, 3);
    match trainer.run() {
        Err(Error::NumericInstability { iteration, loss }) => {
            assert_eq!(iteration, 2);
            assert!(loss.is_nan());
        }
        other => panic!("expected numeric instability, got {other:?}"),
    }
    assert_eq!(trainer.model().critic_calls, 7);
}
