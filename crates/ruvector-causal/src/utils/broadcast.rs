//! Trailing-axis broadcasting for dynamic-rank arrays

use ndarray::{ArrayD, IxDyn, Zip};

use crate::error::{CausalError, Result};

/// Shape obtained by broadcasting `left` against `right`.
///
/// Axes are aligned from the right; each pair must be equal or contain a 1.
/// Returns `None` when the shapes are incompatible.
pub fn broadcast_shape(left: &[usize], right: &[usize]) -> Option<Vec<usize>> {
    let ndim = left.len().max(right.len());
    let pad_left = ndim - left.len();
    let pad_right = ndim - right.len();

    let mut shape = Vec::with_capacity(ndim);
    for axis in 0..ndim {
        let l = if axis < pad_left { 1 } else { left[axis - pad_left] };
        let r = if axis < pad_right { 1 } else { right[axis - pad_right] };
        let d = match (l, r) {
            (l, r) if l == r => l,
            (1, r) => r,
            (l, 1) => l,
            _ => return None,
        };
        shape.push(d);
    }
    Some(shape)
}

/// Apply `f` elementwise over the broadcast of `left` and `right`.
pub fn broadcast_zip_with<F>(left: &ArrayD<f64>, right: &ArrayD<f64>, mut f: F) -> Result<ArrayD<f64>>
where
    F: FnMut(f64, f64) -> f64,
{
    let incompatible = || CausalError::incompatible_shapes(left.shape(), right.shape());
    let shape = broadcast_shape(left.shape(), right.shape()).ok_or_else(incompatible)?;

    let lv = left.broadcast(IxDyn(&shape)).ok_or_else(incompatible)?;
    let rv = right.broadcast(IxDyn(&shape)).ok_or_else(incompatible)?;

    Ok(Zip::from(lv).and(rv).map_collect(|&l, &r| f(l, r)))
}

/// Elementwise `left + right` with broadcasting
pub fn broadcast_add(left: &ArrayD<f64>, right: &ArrayD<f64>) -> Result<ArrayD<f64>> {
    broadcast_zip_with(left, right, |l, r| l + r)
}
