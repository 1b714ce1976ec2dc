//! Numerically stable scalar functions

use super::SOFTPLUS_CUTOFF;

/// Stable softplus: log(1 + exp(x))
///
/// Rewritten as `max(x, 0) + log1p(exp(-|x|))` so the exponential never
/// overflows. For `x > SOFTPLUS_CUTOFF` the correction term is below one ulp
/// and `x` is returned directly.
#[inline]
pub fn softplus(x: f64) -> f64 {
    if x > SOFTPLUS_CUTOFF {
        x
    } else {
        x.max(0.0) + (-x.abs()).exp().ln_1p()
    }
}

/// Logistic sigmoid 1 / (1 + exp(-x)), evaluated without overflow
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// log(sigmoid(x)) = -softplus(-x)
#[inline]
pub fn log_sigmoid(x: f64) -> f64 {
    -softplus(-x)
}

/// Log-odds of a probability: log(p) - log(1 - p)
///
/// Returns ±∞ at the endpoints of [0, 1].
#[inline]
pub fn logit(p: f64) -> f64 {
    p.ln() - (-p).ln_1p()
}
