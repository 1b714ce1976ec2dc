//! Precision, recall and F1 between two adjacency matrices
//!
//! Each matrix is first reduced to one value per unordered node pair:
//!
//! | Pair state | Value |
//! |---|---|
//! | no edge | 0 |
//! | single edge `i → j` (i < j) | +1 |
//! | single edge `j → i` | −1 |
//! | both directions | 2 |
//!
//! Existence metrics compare which pairs are nonzero; orientation metrics
//! require the values to match exactly.
//!
//! The functions take `graph1` and `graph2` positionally: recall is normalized
//! by `graph1`'s edge count and precision by `graph2`'s. Which of the two is
//! the ground truth is the caller's convention.
//!
//! Inputs are not validated. Non-square matrices are read over their leading
//! square block. Graphs of different size are compared over the shorter
//! encoding only: pairs past its end count toward neither numerators nor
//! denominators. Use [`validate_adjacency`] first when inputs are untrusted.

use ndarray::{s, Array1, ArrayBase, Data, Ix2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CausalError, Result};
use crate::triangular::unfill_triangular;

/// Below this `|precision + recall|` the F1 score is defined as 0
pub const F1_EPSILON: f64 = 1e-8;

/// Existence and orientation scores for a pair of graphs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphMetrics {
    /// Shared edges over `graph2`'s edges, ignoring direction
    pub adjacency_precision: f64,
    /// Shared edges over `graph1`'s edges, ignoring direction
    pub adjacency_recall: f64,
    /// Harmonic mean of the adjacency scores
    pub adjacency_f1: f64,
    /// Matching pairs over `graph2`'s edges, direction included
    pub orientation_precision: f64,
    /// Matching pairs over `graph1`'s edges, direction included
    pub orientation_recall: f64,
    /// Harmonic mean of the orientation scores
    pub orientation_f1: f64,
}

impl GraphMetrics {
    /// Score `graph1` against `graph2`.
    pub fn evaluate<S1, S2>(graph1: &ArrayBase<S1, Ix2>, graph2: &ArrayBase<S2, Ix2>) -> Self
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        let (adjacency_precision, adjacency_recall) = adjacency_precision_recall(graph1, graph2);
        let (orientation_precision, orientation_recall) =
            orientation_precision_recall(graph1, graph2);

        let metrics = Self {
            adjacency_precision,
            adjacency_recall,
            adjacency_f1: f1_score(adjacency_precision, adjacency_recall),
            orientation_precision,
            orientation_recall,
            orientation_f1: f1_score(orientation_precision, orientation_recall),
        };
        debug!(
            "Graph metrics over {} nodes: adjacency F1 {:.4}, orientation F1 {:.4}",
            graph1.nrows(),
            metrics.adjacency_f1,
            metrics.orientation_f1
        );
        metrics
    }
}

/// Precision and recall of edge existence, returned as `(precision, recall)`.
///
/// `recall = shared / edges(graph1)`, `precision = shared / edges(graph2)`;
/// each is 0 when its denominator is 0.
pub fn adjacency_precision_recall<S1, S2>(
    graph1: &ArrayBase<S1, Ix2>,
    graph2: &ArrayBase<S2, Ix2>,
) -> (f64, f64)
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let (vec1, vec2) = paired_vectors(graph1, graph2);
    let vec1 = vec1.mapv(|v| v.abs() > 0.0);
    let vec2 = vec2.mapv(|v| v.abs() > 0.0);

    let correspondence = vec1.iter().zip(vec2.iter()).filter(|&(&a, &b)| a && b).count();
    let count1 = vec1.iter().filter(|&&a| a).count();
    let count2 = vec2.iter().filter(|&&b| b).count();

    let recall = ratio_or_zero(correspondence, count1);
    let precision = ratio_or_zero(correspondence, count2);
    (precision, recall)
}

/// F1 score of edge existence
pub fn adjacency_f1<S1, S2>(graph1: &ArrayBase<S1, Ix2>, graph2: &ArrayBase<S2, Ix2>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let (precision, recall) = adjacency_precision_recall(graph1, graph2);
    f1_score(precision, recall)
}

/// Precision and recall of edge orientation, returned as `(precision, recall)`.
///
/// A pair counts as correct only when both encodings agree exactly, so a
/// reversed edge or a one-sided guess at a bidirectional pair is wrong.
pub fn orientation_precision_recall<S1, S2>(
    graph1: &ArrayBase<S1, Ix2>,
    graph2: &ArrayBase<S2, Ix2>,
) -> (f64, f64)
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let (vec1, vec2) = paired_vectors(graph1, graph2);

    let mut matched1 = 0;
    let mut matched2 = 0;
    for (&a, &b) in vec1.iter().zip(vec2.iter()) {
        if a == b {
            if a != 0.0 {
                matched1 += 1;
            }
            if b != 0.0 {
                matched2 += 1;
            }
        }
    }
    let nonzero1 = vec1.iter().filter(|&&a| a != 0.0).count();
    let nonzero2 = vec2.iter().filter(|&&b| b != 0.0).count();

    let recall = ratio_or_zero(matched1, nonzero1);
    let precision = ratio_or_zero(matched2, nonzero2);
    (precision, recall)
}

/// F1 score of edge orientation
pub fn orientation_f1<S1, S2>(graph1: &ArrayBase<S1, Ix2>, graph2: &ArrayBase<S2, Ix2>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let (precision, recall) = orientation_precision_recall(graph1, graph2);
    f1_score(precision, recall)
}

/// Harmonic mean `2pr / (p + r)`, or 0 when `|p + r| < F1_EPSILON`
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    let denominator = precision + recall;
    if denominator.abs() < F1_EPSILON {
        return 0.0;
    }
    2.0 * precision * recall / denominator
}

/// Check that a matrix is square with finite entries.
///
/// The metric functions never call this; it is for callers that want to
/// reject malformed graphs up front.
///
/// # Errors
///
/// Returns [`CausalError::InvalidAdjacency`] describing the first problem found.
pub fn validate_adjacency<S>(graph: &ArrayBase<S, Ix2>) -> Result<()>
where
    S: Data<Elem = f64>,
{
    let (rows, cols) = graph.dim();
    if rows != cols {
        return Err(CausalError::invalid_adjacency(format!(
            "expected a square matrix, got {}x{}",
            rows, cols
        )));
    }
    if let Some(((i, j), v)) = graph.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(CausalError::invalid_adjacency(format!(
            "entry ({}, {}) is {}",
            i, j, v
        )));
    }
    Ok(())
}

/// Signed per-pair edge encoding of length n(n-1)/2.
///
/// `diff + (1 − |diff|)·(upper + lower)` with `diff = upper − lower`. For
/// 0/1 matrices this is 0, ±1 or 2 as in the module table. With weighted
/// edges the algebra is kept as is: a pair with weights 2 and 1 in opposite
/// directions gives `diff = 1` and reads as a single `i → j` edge.
pub(crate) fn to_vector<S>(graph: &ArrayBase<S, Ix2>) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    let upper = unfill_triangular(graph, true);
    let lower = unfill_triangular(graph, false);
    let diff = &upper - &lower;
    let correction = diff.mapv(|d| 1.0 - d.abs()) * (&upper + &lower);
    diff + correction
}

/// Encodings of both graphs cut to their common length.
///
/// Pairs of the larger graph with no counterpart in the smaller one are
/// dropped from numerators and denominators alike.
fn paired_vectors<S1, S2>(
    graph1: &ArrayBase<S1, Ix2>,
    graph2: &ArrayBase<S2, Ix2>,
) -> (Array1<f64>, Array1<f64>)
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let mut vec1 = to_vector(graph1);
    let mut vec2 = to_vector(graph2);
    let len = vec1.len().min(vec2.len());
    vec1.slice_collapse(s![..len]);
    vec2.slice_collapse(s![..len]);
    (vec1, vec2)
}

#[inline]
fn ratio_or_zero(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
