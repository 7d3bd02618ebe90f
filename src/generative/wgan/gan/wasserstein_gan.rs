//! Wasserstein GAN: both players, their optimizers and the update rules.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::generative::wgan::config::WganConfig;
use crate::generative::wgan::discriminator::Discriminator;
use crate::generative::wgan::generator::Generator;
use crate::objective::{generator_cotangent, generator_loss, CriticObjective};
use crate::optim::{clip_weights, Adam, Optimizer, RmsProp, WEIGHT_CLIP_BOUNDS};
use crate::penalty::{Critic, Penalty, PenaltyAdjoint};
use crate::train::AdversarialModel;

use super::stats::WganStats;
use super::step_result::CriticStep;

fn optimizer_for(config: &WganConfig) -> Box<dyn Optimizer> {
    if config.mode.uses_penalty() {
        Box::new(Adam::wgan_gp())
    } else {
        Box::new(RmsProp::wgan())
    }
}

/// Generator and critic with one optimizer each
///
/// The two parameter sets are disjoint: each optimizer only ever sees the
/// parameters of its own network.
pub struct WassersteinGan {
    /// Configuration
    pub config: WganConfig,
    /// Generator network
    pub generator: Generator,
    /// Critic network
    pub discriminator: Discriminator,
    /// Training statistics
    pub stats: WganStats,
    penalty: Option<Penalty>,
    gen_optimizer: Box<dyn Optimizer>,
    disc_optimizer: Box<dyn Optimizer>,
    /// Random number generator for noise and interpolation weights
    rng: StdRng,
}

impl WassersteinGan {
    /// Create a new WGAN
    pub fn new(config: WganConfig) -> Self {
        let mut rng = StdRng::from_os_rng();
        let generator = Generator::new(config.dim, config.fixed_generator, &mut rng);
        let discriminator = Discriminator::new(config.dim, &mut rng);
        Self::from_parts(config, generator, discriminator, rng)
    }

    /// Create a new WGAN with a seed for reproducibility
    pub fn with_seed(config: WganConfig, seed: u64) -> Self {
        let generator = Generator::with_seed(config.dim, config.fixed_generator, seed);
        let discriminator = Discriminator::with_seed(config.dim, seed.wrapping_add(1));
        let rng = StdRng::seed_from_u64(seed.wrapping_add(2));
        Self::from_parts(config, generator, discriminator, rng)
    }

    /// Assemble from existing networks; optimizers follow `config.mode`
    pub fn from_parts(
        config: WganConfig,
        generator: Generator,
        discriminator: Discriminator,
        rng: StdRng,
    ) -> Self {
        Self {
            penalty: config.penalty(),
            gen_optimizer: optimizer_for(&config),
            disc_optimizer: optimizer_for(&config),
            config,
            generator,
            discriminator,
            stats: WganStats::default(),
            rng,
        }
    }

    /// Replace both optimizers, discarding their state
    #[cfg(test)]
    #[must_use]
    pub fn with_optimizers(mut self, gen: Box<dyn Optimizer>, disc: Box<dyn Optimizer>) -> Self {
        self.gen_optimizer = gen;
        self.disc_optimizer = disc;
        self
    }

    /// Penalty applied to the critic, `None` in `wgan` mode
    pub fn penalty(&self) -> Option<Penalty> {
        self.penalty
    }

    /// Generator and critic optimizer settings, for the run log
    pub fn optimizer_settings(&self) -> (String, String) {
        (self.gen_optimizer.to_string(), self.disc_optimizer.to_string())
    }

    /// Get total number of parameters
    #[must_use]
    pub fn num_parameters(&self) -> usize {
        self.generator.num_parameters() + self.discriminator.num_parameters()
    }

    /// One Adam/RMSProp step on the generator against the current critic
    fn update_generator(&mut self) -> Option<f32> {
        let trace = self.generator.sample_traced(self.config.batch_size, &mut self.rng)?;
        let fake = trace.output();

        let critic_trace = self.discriminator.forward_trace(fake);
        let scores = critic_trace.output().column(0).to_owned();
        let loss = generator_loss(&scores);

        let (_, point_cotangent) =
            self.discriminator.backward(&critic_trace, &generator_cotangent(scores.len()));
        let grads = self.generator.backward(&trace, &point_cotangent)?;

        let net = self.generator.net_mut()?;
        self.gen_optimizer.step(&mut net.parameters_mut(), &grads.views());
        Some(loss)
    }

    /// Critic update; also returns how many weight entries were clipped
    fn update_critic(&mut self, real: &Array2<f32>) -> (CriticStep, usize) {
        let fake = self.generator.sample(real, &mut self.rng);

        let assessment = self
            .penalty
            .map(|penalty| penalty.assess(real, &fake, &self.discriminator, &mut self.rng));

        let real_trace = self.discriminator.forward_trace(real);
        let fake_trace = self.discriminator.forward_trace(&fake);
        let real_scores = real_trace.output().column(0).to_owned();
        let fake_scores = fake_trace.output().column(0).to_owned();

        let objective = CriticObjective::assemble(
            &real_scores,
            &fake_scores,
            assessment.map(|a| (self.config.penalty_weight, a)),
        );

        let (mut grads, _) = self.discriminator.backward(&real_trace, &objective.real_cotangent);
        let (fake_grads, _) = self.discriminator.backward(&fake_trace, &objective.fake_cotangent);
        grads.add_scaled(&fake_grads, 1.0);
        if let Some(PenaltyAdjoint::Slope { interpolates, cotangent }) = &objective.slope_adjoint {
            grads.add_scaled(&self.discriminator.slope_backward(interpolates, cotangent), 1.0);
        }

        let mut params = self.discriminator.net_mut().parameters_mut();
        self.disc_optimizer.step(&mut params, &grads.views());
        let clipped = if self.config.mode.uses_penalty() {
            0
        } else {
            let (lo, hi) = WEIGHT_CLIP_BOUNDS;
            clip_weights(&mut params, lo, hi)
        };

        let step = CriticStep { loss: objective.loss, wasserstein: objective.wasserstein, penalty: objective.penalty };
        (step, clipped)
    }
}

impl AdversarialModel for WassersteinGan {
    fn generator_step(&mut self) -> Option<f32> {
        let loss = self.update_generator()?;
        self.stats.record_generator();
        Some(loss)
    }

    fn critic_step(&mut self, real: &Array2<f32>) -> CriticStep {
        let (step, clipped) = self.update_critic(real);
        self.stats.record_critic(clipped);
        step
    }

    fn critic_scores(&self, points: &Array2<f32>) -> Array1<f32> {
        self.discriminator.score(points)
    }

    fn sample(&mut self, real: &Array2<f32>) -> Array2<f32> {
        self.generator.sample(real, &mut self.rng)
    }

    fn parameter_shapes(&self) -> Vec<(String, Vec<usize>)> {
        let mut shapes = self.generator.parameter_shapes();
        shapes.extend(self.discriminator.net().parameter_shapes());
        shapes
    }
}
