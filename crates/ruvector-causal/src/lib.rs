//! # RuVector Causal
//!
//! Building blocks for simulating and scoring structural causal models:
//!
//! - **Noise-accessible observation models**: a Bernoulli whose samples are
//!   a threshold of logistic exogenous noise, with a posterior sampler that
//!   maps an observed outcome back to consistent noise. Counterfactuals then
//!   replay that noise under an intervened model.
//! - **Graph comparison**: precision, recall and F1 of a learned adjacency
//!   matrix against a reference, for edge existence and edge orientation.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::{arr1, arr2};
//! use rand::SeedableRng;
//! use ruvector_causal::prelude::*;
//!
//! // Observation model: logits = base + delta
//! let base = arr1(&[0.5, -1.0]).into_dyn();
//! let delta = arr2(&[[1.0, 0.0], [-2.0, 3.0]]).into_dyn();
//! let model = NoiseAccessibleBernoulli::new(delta, &base).unwrap();
//!
//! let observed = arr2(&[[1.0, 0.0], [0.0, 1.0]]).into_dyn();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let noise = model.sample_to_noise(&observed, &mut rng).unwrap();
//! assert_eq!(model.noise_to_sample(&noise).unwrap(), observed);
//!
//! // Graph scoring
//! let learned = arr2(&[[0.0, 1.0], [0.0, 0.0]]);
//! let truth = arr2(&[[0.0, 0.0], [1.0, 0.0]]);
//! assert_eq!(adjacency_f1(&learned, &truth), 1.0);
//! assert_eq!(orientation_f1(&learned, &truth), 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod distributions;
pub mod error;
pub mod graph;
pub mod triangular;
pub mod utils;

pub use config::NoiseModelConfig;
pub use distributions::{
    counterfactual, Bernoulli, Distribution, NoiseAccessible, NoiseAccessibleBernoulli,
};
pub use error::{CausalError, Result};
pub use graph::{
    adjacency_f1, adjacency_precision_recall, f1_score, orientation_f1,
    orientation_precision_recall, validate_adjacency, GraphMetrics,
};
pub use triangular::{fill_triangular, unfill_triangular};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::distributions::*;
    pub use crate::error::*;
    pub use crate::graph::*;
    pub use crate::triangular::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_crate_version() {
        let version = env!("CARGO_PKG_VERSION");
        assert!(!version.is_empty());
    }

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<NoiseAccessibleBernoulli>();
        assert_send_sync::<Bernoulli>();
        assert_send_sync::<GraphMetrics>();
        assert_send_sync::<NoiseModelConfig>();
        assert_send_sync::<CausalError>();
    }
}
