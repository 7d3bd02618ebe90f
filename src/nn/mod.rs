//! Fully connected ReLU networks with analytic gradients
//!
//! Both players of the toy GAN are small multilayer perceptrons. Besides the
//! usual backward pass, [`Mlp::input_gradient_backward`] differentiates the
//! network's input gradient with respect to its parameters, which is what a
//! gradient penalty needs to train through.

mod linear;
mod mlp;


pub use linear::{Init, Linear, LinearGrad};
pub use mlp::{ForwardTrace, Gradients, Mlp};
