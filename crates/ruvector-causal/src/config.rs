//! Configuration for noise-accessible distributions

use serde::{Deserialize, Serialize};

/// Settings shared by the noise models.
///
/// Argument validation is off by default: the models sit inside training and
/// simulation pipelines where inputs come from other model components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseModelConfig {
    /// Check logits, samples and noise shapes on every call.
    pub validate_args: bool,
}

impl NoiseModelConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with argument validation turned on
    pub fn validated() -> Self {
        Self {
            validate_args: true,
        }
    }

    /// Enable or disable argument validation
    pub fn with_validation(mut self, validate_args: bool) -> Self {
        self.validate_args = validate_args;
        self
    }
}
