//! Numerical and shape helpers shared by the distributions

mod broadcast;
mod numerical;

pub use broadcast::*;
pub use numerical::*;

/// Above this magnitude `softplus(x)` equals `max(x, 0)` in f64
pub const SOFTPLUS_CUTOFF: f64 = 40.0;
