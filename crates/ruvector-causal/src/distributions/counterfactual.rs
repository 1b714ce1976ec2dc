//! Counterfactual sampling through shared exogenous noise
//!
//! Pearl's three steps map directly onto the two noise operations:
//!
//! 1. **Abduction**: `factual.sample_to_noise(observed)` draws the noise
//!    consistent with what was seen
//! 2. **Action**: the caller builds `intervened`, the same observation model
//!    with logits recomputed under the intervention
//! 3. **Prediction**: `intervened.noise_to_sample(noise)` replays that noise

use ndarray::ArrayD;
use rand::Rng;
use tracing::trace;

use super::NoiseAccessible;
use crate::error::Result;

/// Sample what `observed` would have been under `intervened`.
///
/// # Errors
///
/// Propagates shape errors from either model.
pub fn counterfactual<F, I, R>(
    factual: &F,
    intervened: &I,
    observed: &ArrayD<f64>,
    rng: &mut R,
) -> Result<ArrayD<f64>>
where
    F: NoiseAccessible,
    I: NoiseAccessible,
    R: Rng + ?Sized,
{
    let noise = factual.sample_to_noise(observed, rng)?;
    trace!("Replaying {} noise values under intervention", noise.len());
    intervened.noise_to_sample(&noise)
}
