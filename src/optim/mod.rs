//! Optimizers for the generator and critic parameters

mod adam;
mod clip;
#[cfg(test)]
mod convergence_tests;
mod optimizer;
mod rmsprop;

pub use adam::Adam;
pub use clip::{clip_weights, WEIGHT_CLIP_BOUNDS};
pub use optimizer::Optimizer;
pub use rmsprop::RmsProp;
