//! The outer iteration loop

use std::time::Instant;

use super::core::Trainer;
use super::result::TrainReport;
use crate::cli::{log, LogLevel};
use crate::data::BatchSource;
use crate::error::{Error, Result};
use crate::monitor::{Metric, MetricsStore};
use crate::train::{should_visualize, AdversarialModel, FrameSink};

impl<M, S, F, L> Trainer<M, S, F, L>
where
    M: AdversarialModel,
    S: BatchSource,
    F: FrameSink,
    L: MetricsStore,
{
    /// Run every iteration of the schedule
    ///
    /// Aborts with [`Error::NumericInstability`] as soon as a critic loss
    /// is NaN or infinite.
    pub fn run(&mut self) -> Result<TrainReport> {
        let start = Instant::now();
        let mut report = TrainReport::default();

        for t in 0..self.schedule.iters {
            if self.schedule.updates_generator(t) {
                report.generator_steps += 1;
                if let Some(loss) = self.model.generator_step() {
                    report.generator_updates += 1;
                    self.metrics.plot(Metric::GenCost, loss);
                }
            }

            let mut last = None;
            for _ in 0..self.schedule.critic_iters {
                let real = self.data.next_batch();
                let step = self.model.critic_step(&real);
                report.critic_updates += 1;
                if !step.loss.is_finite() {
                    return Err(Error::NumericInstability { iteration: t, loss: step.loss });
                }
                last = Some((real, step));
            }

            if let Some((real, step)) = last {
                self.metrics.plot(Metric::DiscCost, step.loss);
                if let Some(penalty) = step.penalty {
                    self.metrics.plot(Metric::Penalty, penalty);
                }
                report.final_disc_cost = Some(step.loss);

                if should_visualize(t) {
                    self.metrics.flush()?;
                    self.frames.render(t, &real, &mut self.model)?;
                    report.frames += 1;
                    log(self.level, LogLevel::Verbose, &format!("  frame {t} rendered"));
                }
            }

            self.metrics.tick();
            report.iterations += 1;
        }

        report.elapsed_secs = start.elapsed().as_secs_f64();
        Ok(report)
    }
}
