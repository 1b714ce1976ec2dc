//! Bernoulli distribution parameterized by logits

use ndarray::{ArrayD, IxDyn};
use rand::Rng;

use super::Distribution;
use crate::config::NoiseModelConfig;
use crate::error::{CausalError, Result};
use crate::utils::{broadcast_zip_with, log_sigmoid, logit, sigmoid, softplus};

/// Independent Bernoulli variables over {0, 1}, one per logit.
///
/// `p = sigmoid(logit)`. All densities are computed from the logits, so
/// extreme log-odds stay finite.
#[derive(Debug, Clone)]
pub struct Bernoulli {
    logits: ArrayD<f64>,
    config: NoiseModelConfig,
}

impl Bernoulli {
    /// Create from log-odds without validation
    pub fn from_logits(logits: ArrayD<f64>) -> Self {
        Self {
            logits,
            config: NoiseModelConfig::default(),
        }
    }

    /// Create from log-odds under the given configuration.
    ///
    /// # Errors
    ///
    /// With `validate_args`, returns [`CausalError::InvalidParameter`] if any
    /// logit is NaN.
    pub fn with_config(logits: ArrayD<f64>, config: NoiseModelConfig) -> Result<Self> {
        if config.validate_args && logits.iter().any(|l| l.is_nan()) {
            return Err(CausalError::invalid_parameter("logits", "contains NaN"));
        }
        Ok(Self { logits, config })
    }

    /// Create from probabilities.
    ///
    /// # Errors
    ///
    /// Returns [`CausalError::InvalidParameter`] if any probability is outside
    /// `[0, 1]`.
    pub fn from_probs(probs: ArrayD<f64>) -> Result<Self> {
        if let Some(p) = probs.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(CausalError::invalid_parameter(
                "probs",
                format!("{} is outside [0, 1]", p),
            ));
        }
        Ok(Self::from_logits(probs.mapv(logit)))
    }

    /// Log-odds of each variable
    pub fn logits(&self) -> &ArrayD<f64> {
        &self.logits
    }

    /// Success probability of each variable
    pub fn probs(&self) -> ArrayD<f64> {
        self.logits.mapv(sigmoid)
    }

    /// Active configuration
    pub fn config(&self) -> &NoiseModelConfig {
        &self.config
    }

    pub(crate) fn check_binary(values: &ArrayD<f64>) -> Result<()> {
        match values.iter().find(|&&v| v != 0.0 && v != 1.0) {
            Some(v) => Err(CausalError::invalid_sample(format!(
                "expected 0.0 or 1.0, found {}",
                v
            ))),
            None => Ok(()),
        }
    }
}

impl Distribution for Bernoulli {
    fn batch_shape(&self) -> &[usize] {
        self.logits.shape()
    }

    fn sample<R: Rng + ?Sized>(&self, sample_shape: &[usize], rng: &mut R) -> Result<ArrayD<f64>> {
        let shape: Vec<usize> = sample_shape.iter().chain(self.batch_shape()).copied().collect();
        let logits = self
            .logits
            .broadcast(IxDyn(&shape))
            .ok_or_else(|| CausalError::incompatible_shapes(&shape, self.batch_shape()))?;

        Ok(logits.mapv(|l| {
            if rng.gen::<f64>() < sigmoid(l) {
                1.0
            } else {
                0.0
            }
        }))
    }

    fn log_prob(&self, value: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        if self.config.validate_args {
            Self::check_binary(value)?;
        }
        // -BCE-with-logits, equal to x·l − softplus(l)
        broadcast_zip_with(value, &self.logits, |x, l| {
            x * log_sigmoid(l) + (1.0 - x) * log_sigmoid(-l)
        })
    }

    fn mean(&self) -> ArrayD<f64> {
        self.probs()
    }

    fn variance(&self) -> ArrayD<f64> {
        self.logits.mapv(|l| {
            let p = sigmoid(l);
            p * (1.0 - p)
        })
    }

    fn entropy(&self) -> ArrayD<f64> {
        self.logits.mapv(|l| softplus(l) - sigmoid(l) * l)
    }
}
