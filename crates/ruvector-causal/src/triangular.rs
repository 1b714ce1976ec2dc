//! Strictly triangular flattening of square matrices
//!
//! Pairs are visited row-major over the strict upper triangle:
//! `(0,1), (0,2), …, (0,n-1), (1,2), …, (n-2,n-1)`. The lower vector reads
//! the transposed entry `(j,i)` for the same pair, so position `k` of the
//! upper and lower vectors always describes the same unordered node pair.

use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};

use crate::error::{CausalError, Result};

/// Number of strictly triangular entries of an n×n matrix: n(n-1)/2
#[inline]
pub fn num_triangular_elements(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Recover n from a strictly triangular element count.
///
/// # Errors
///
/// Returns [`CausalError::InvalidTriangularLength`] if `len` is not n(n-1)/2
/// for any n.
pub fn num_nodes_from_triangular_len(len: usize) -> Result<usize> {
    // n = (1 + sqrt(1 + 8·len)) / 2, then verify exactly in integers
    let estimate = ((1.0 + (1.0 + 8.0 * len as f64).sqrt()) / 2.0).round() as usize;
    for n in estimate.saturating_sub(1)..=estimate + 1 {
        if num_triangular_elements(n) == len {
            return Ok(n.max(1));
        }
    }
    Err(CausalError::InvalidTriangularLength { len })
}

/// Flatten the strict upper (`upper = true`) or lower triangle of a matrix.
///
/// Non-square inputs are read over their leading `min(rows, cols)` square
/// block; nothing is validated.
pub fn unfill_triangular<S>(matrix: &ArrayBase<S, Ix2>, upper: bool) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    let n = matrix.nrows().min(matrix.ncols());
    let mut out = Vec::with_capacity(num_triangular_elements(n));
    for i in 0..n {
        for j in (i + 1)..n {
            out.push(if upper { matrix[[i, j]] } else { matrix[[j, i]] });
        }
    }
    Array1::from_vec(out)
}

/// Inverse of [`unfill_triangular`]: place a flat vector into an n×n matrix.
///
/// The diagonal and the other triangle are zero.
///
/// # Errors
///
/// Returns [`CausalError::InvalidTriangularLength`] if the vector length is
/// not n(n-1)/2.
pub fn fill_triangular<S>(values: &ArrayBase<S, Ix1>, upper: bool) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    let n = num_nodes_from_triangular_len(values.len())?;
    let mut matrix = Array2::zeros((n, n));
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let v = values[k];
            if upper {
                matrix[[i, j]] = v;
            } else {
                matrix[[j, i]] = v;
            }
            k += 1;
        }
    }
    Ok(matrix)
}
