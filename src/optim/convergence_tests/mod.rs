//! Convergence tests for the optimizers on small closed-form problems

mod helpers;
