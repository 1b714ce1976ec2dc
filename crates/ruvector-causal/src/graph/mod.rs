//! Causal graph evaluation
//!
//! Graphs are dense adjacency matrices: entry `(i, j)` nonzero means a
//! directed edge `i → j`.

pub mod metrics;

pub use metrics::{
    adjacency_f1, adjacency_precision_recall, f1_score, orientation_f1,
    orientation_precision_recall, validate_adjacency, GraphMetrics, F1_EPSILON,
};
