//! Benchmark parameter types rendered as Criterion ids.

use std::fmt;

/// Parameters for a dendrogram construction run.
#[derive(Clone, Debug)]
pub struct DendrogramBenchParams {
    /// Number of points in the spanning tree.
    pub point_count: usize,
}

impl fmt::Display for DendrogramBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}

/// Parameters for a condensation run.
#[derive(Clone, Debug)]
pub struct CondenseBenchParams {
    /// Number of points in the spanning tree.
    pub point_count: usize,
    /// Minimum cluster size used for condensation.
    pub min_cluster_size: usize,
}

impl fmt::Display for CondenseBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},min={}", self.point_count, self.min_cluster_size)
    }
}
