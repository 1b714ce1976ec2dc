//! Error types for ruvector-causal

use thiserror::Error;

/// Result type alias for ruvector-causal operations
pub type Result<T> = std::result::Result<T, CausalError>;

/// Errors raised by the noise models and graph utilities
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CausalError {
    /// An input did not have the exact shape the operation requires
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Required shape
        expected: Vec<usize>,
        /// Shape that was passed in
        got: Vec<usize>,
    },

    /// Two arrays could not be broadcast against each other
    #[error("Shapes {left:?} and {right:?} cannot be broadcast together")]
    IncompatibleShapes {
        /// Shape of the left operand
        left: Vec<usize>,
        /// Shape of the right operand
        right: Vec<usize>,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Reason why it's invalid
        reason: String,
    },

    /// A sample outside the support of the distribution
    #[error("Invalid sample: {message}")]
    InvalidSample {
        /// Description of the offending value
        message: String,
    },

    /// A matrix that is not a usable adjacency matrix
    #[error("Invalid adjacency matrix: {message}")]
    InvalidAdjacency {
        /// Description of the problem
        message: String,
    },

    /// A flat vector whose length is not n(n-1)/2 for any n
    #[error("Length {len} is not a strictly triangular element count")]
    InvalidTriangularLength {
        /// Offending length
        len: usize,
    },
}

impl CausalError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an incompatible shapes error
    pub fn incompatible_shapes(left: &[usize], right: &[usize]) -> Self {
        Self::IncompatibleShapes {
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid sample error
    pub fn invalid_sample(message: impl Into<String>) -> Self {
        Self::InvalidSample {
            message: message.into(),
        }
    }

    /// Create an invalid adjacency error
    pub fn invalid_adjacency(message: impl Into<String>) -> Self {
        Self::InvalidAdjacency {
            message: message.into(),
        }
    }
}
