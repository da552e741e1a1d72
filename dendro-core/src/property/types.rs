//! Fixture types for the property suites.

use test_strategy::Arbitrary;

use crate::LinkageEdge;

/// Topology of the generated spanning tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum TreeShape {
    /// Each new point attaches to a uniformly chosen earlier point.
    #[weight(3)]
    RandomAttach,
    /// Points form a path `0 - 1 - ... - n-1`.
    #[weight(1)]
    Chain,
    /// Every point attaches to point `0`.
    #[weight(1)]
    Star,
    /// Tight groups joined to each other by long edges.
    #[weight(3)]
    Grouped,
}

/// How edge distances are drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum DistanceProfile {
    /// Continuous distances, almost surely distinct.
    #[weight(3)]
    Continuous,
    /// Distances from a handful of values, producing many ties.
    #[weight(2)]
    ManyTied,
    /// Continuous distances with a share of exact zeros.
    #[weight(1)]
    WithZeros,
}

/// A generated spanning tree together with the parameters used to build it.
#[derive(Clone, Debug)]
pub(super) struct TreeFixture {
    /// Number of points in the tree.
    pub point_count: usize,
    /// Spanning-tree edges in shuffled order.
    pub edges: Vec<LinkageEdge>,
    /// Minimum cluster size to condense with.
    pub min_cluster_size: usize,
    /// Topology used during generation.
    pub shape: TreeShape,
    /// Distance profile used during generation.
    pub profile: DistanceProfile,
}
