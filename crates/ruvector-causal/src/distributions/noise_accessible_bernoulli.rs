//! Bernoulli observation model with invertible access to its logistic noise
//!
//! A Bernoulli draw with logit `l = base + delta` can be written with the
//! Gumbel-max trick as
//!
//! ```text
//! x = 1[delta + z > 0],    z = base + G1 − G2,    G1, G2 ~ Gumbel(0, 1)
//! ```
//!
//! so the sample is a threshold of a logistic noise variable `z`. Going the
//! other way, `sample_to_noise` draws `z` from its posterior given `x`: the
//! Gumbel difference truncated to the side of zero that produces `x`. The
//! truncated draw is written with two softplus calls instead of an explicit
//! inverse-CDF so it stays finite for very large |logits|.
//!
//! ## References
//!
//! - Oberst & Sontag (2019): "Counterfactual Off-Policy Evaluation with
//!   Gumbel-Max Structural Causal Models"
//! - Maddison: "Gumbel machinery" notes on Gumbel posteriors

use ndarray::{ArrayD, Zip};
use rand::Rng;
use rand_distr::{Distribution as _, Gumbel};
use tracing::{debug, trace};

use super::{Bernoulli, Distribution, NoiseAccessible};
use crate::config::NoiseModelConfig;
use crate::error::{CausalError, Result};
use crate::utils::{broadcast_add, broadcast_zip_with, softplus};

/// Bernoulli with logits `base_logits + delta_logits` and access to its noise.
///
/// `delta_logits` has shape `sample_shape + batch_shape` (typically a model's
/// per-sample prediction) and `base_logits` has shape `batch_shape`.
#[derive(Debug, Clone)]
pub struct NoiseAccessibleBernoulli {
    delta_logits: ArrayD<f64>,
    inner: Bernoulli,
}

impl NoiseAccessibleBernoulli {
    /// Create a model with validation disabled.
    ///
    /// # Errors
    ///
    /// Returns [`CausalError::IncompatibleShapes`] if the two logit arrays do
    /// not broadcast together.
    pub fn new(delta_logits: ArrayD<f64>, base_logits: &ArrayD<f64>) -> Result<Self> {
        Self::with_config(delta_logits, base_logits, NoiseModelConfig::default())
    }

    /// Create a model under the given configuration.
    pub fn with_config(
        delta_logits: ArrayD<f64>,
        base_logits: &ArrayD<f64>,
        config: NoiseModelConfig,
    ) -> Result<Self> {
        let logits = broadcast_add(base_logits, &delta_logits)?;
        debug!(
            "Noise-accessible Bernoulli: delta {:?}, base {:?}, validate_args={}",
            delta_logits.shape(),
            base_logits.shape(),
            config.validate_args
        );
        let inner = Bernoulli::with_config(logits, config)?;
        Ok(Self {
            delta_logits,
            inner,
        })
    }

    /// Per-sample logit offsets, stored as given
    pub fn delta_logits(&self) -> &ArrayD<f64> {
        &self.delta_logits
    }

    /// Combined logits `base_logits + delta_logits`
    pub fn logits(&self) -> &ArrayD<f64> {
        self.inner.logits()
    }

    /// Success probability of each variable
    pub fn probs(&self) -> ArrayD<f64> {
        self.inner.probs()
    }

    /// Active configuration
    pub fn config(&self) -> &NoiseModelConfig {
        self.inner.config()
    }

    /// [`NoiseAccessible::sample_to_noise`] drawing from `rand::thread_rng()`.
    pub fn sample_to_noise_thread_rng(&self, samples: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        self.sample_to_noise(samples, &mut rand::thread_rng())
    }
}

impl Distribution for NoiseAccessibleBernoulli {
    fn batch_shape(&self) -> &[usize] {
        self.inner.batch_shape()
    }

    fn sample<R: Rng + ?Sized>(&self, sample_shape: &[usize], rng: &mut R) -> Result<ArrayD<f64>> {
        self.inner.sample(sample_shape, rng)
    }

    fn log_prob(&self, value: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        self.inner.log_prob(value)
    }

    fn mean(&self) -> ArrayD<f64> {
        self.inner.mean()
    }

    fn variance(&self) -> ArrayD<f64> {
        self.inner.variance()
    }

    fn entropy(&self) -> ArrayD<f64> {
        self.inner.entropy()
    }
}

impl NoiseAccessible for NoiseAccessibleBernoulli {
    /// Posterior draw of the logistic noise given observed `samples`.
    ///
    /// # Errors
    ///
    /// Returns [`CausalError::ShapeMismatch`] unless `samples` has exactly the
    /// shape of `delta_logits`, and [`CausalError::IncompatibleShapes`] when
    /// `base_logits` has more axes than `delta_logits`.
    fn sample_to_noise<R: Rng + ?Sized>(&self, samples: &ArrayD<f64>, rng: &mut R) -> Result<ArrayD<f64>> {
        if samples.shape() != self.delta_logits.shape() {
            return Err(CausalError::shape_mismatch(
                self.delta_logits.shape(),
                samples.shape(),
            ));
        }
        if self.config().validate_args {
            Bernoulli::check_binary(samples)?;
        }
        trace!("Drawing posterior noise for {} observations", samples.len());

        let gumbel = Gumbel::new(0.0, 1.0)
            .map_err(|e| CausalError::invalid_parameter("gumbel", e.to_string()))?;
        let diff_sample: ArrayD<f64> =
            ArrayD::from_shape_simple_fn(samples.raw_dim(), || gumbel.sample(rng) - gumbel.sample(rng));

        let logits = self
            .logits()
            .broadcast(samples.raw_dim())
            .ok_or_else(|| {
                CausalError::incompatible_shapes(self.logits().shape(), samples.shape())
            })?;

        Ok(Zip::from(samples)
            .and(&diff_sample)
            .and(logits)
            .and(&self.delta_logits)
            .map_collect(|&x, &diff, &l, &delta| {
                // −log P(outcome not observed)
                let neg_log_prob_non_sampled = softplus(l * x - l * (1.0 - x));
                let positive_sample = softplus(diff + neg_log_prob_non_sampled);
                positive_sample * x - positive_sample * (1.0 - x) - delta
            }))
    }

    /// `1.0` where `delta_logits + noise > 0`, `0.0` elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`CausalError::IncompatibleShapes`] if `noise` does not
    /// broadcast against `delta_logits`, and with `validate_args`
    /// [`CausalError::ShapeMismatch`] unless the shapes are equal.
    fn noise_to_sample(&self, noise: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        if self.config().validate_args && noise.shape() != self.delta_logits.shape() {
            return Err(CausalError::shape_mismatch(
                self.delta_logits.shape(),
                noise.shape(),
            ));
        }
        broadcast_zip_with(&self.delta_logits, noise, |delta, z| {
            if delta + z > 0.0 {
                1.0
            } else {
                0.0
            }
        })
    }
}
