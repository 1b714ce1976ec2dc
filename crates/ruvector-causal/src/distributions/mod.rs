//! Distributions with optional access to their exogenous noise
//!
//! Two capability traits split what a distribution can do:
//!
//! - [`Distribution`]: forward sampling, log-probability and moments
//! - [`NoiseAccessible`]: the deterministic noise → sample map and the
//!   stochastic posterior sample → noise map used for counterfactuals
//!
//! A type opts into each one separately; [`NoiseAccessibleBernoulli`]
//! implements both.

mod bernoulli;
mod counterfactual;
mod noise_accessible_bernoulli;

pub use bernoulli::Bernoulli;
pub use counterfactual::counterfactual;
pub use noise_accessible_bernoulli::NoiseAccessibleBernoulli;

use ndarray::ArrayD;
use rand::Rng;

use crate::error::Result;

/// A batched probability distribution over arrays.
pub trait Distribution {
    /// Shape of one draw (the parameter shape)
    fn batch_shape(&self) -> &[usize];

    /// Draw samples of shape `sample_shape ++ batch_shape`.
    fn sample<R: Rng + ?Sized>(&self, sample_shape: &[usize], rng: &mut R) -> Result<ArrayD<f64>>;

    /// Elementwise log-probability of `value`, broadcast against the batch.
    fn log_prob(&self, value: &ArrayD<f64>) -> Result<ArrayD<f64>>;

    /// Mean of each batch element
    fn mean(&self) -> ArrayD<f64>;

    /// Variance of each batch element
    fn variance(&self) -> ArrayD<f64>;

    /// Entropy of each batch element, in nats
    fn entropy(&self) -> ArrayD<f64>;
}

/// A distribution whose samples are a deterministic function of exogenous noise.
pub trait NoiseAccessible {
    /// Draw noise from its posterior given observed `samples`.
    ///
    /// Pushing the result through [`NoiseAccessible::noise_to_sample`]
    /// reproduces `samples`.
    fn sample_to_noise<R: Rng + ?Sized>(&self, samples: &ArrayD<f64>, rng: &mut R) -> Result<ArrayD<f64>>;

    /// Deterministically map noise to a sample.
    fn noise_to_sample(&self, noise: &ArrayD<f64>) -> Result<ArrayD<f64>>;
}
