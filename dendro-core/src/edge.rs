//! Spanning-tree edges consumed by dendrogram construction.

use std::cmp::Ordering;

/// A weighted spanning-tree edge between two dendrogram ids.
///
/// Endpoints usually name points (`0..point_count`), but an endpoint may also
/// name a merge node that already exists when the edge is processed. The
/// distance is the mutual-reachability distance at which the two partitions
/// join.
///
/// Edges order by distance first (using [`f32::total_cmp`]) and then by
/// endpoints, so sorting a slice of edges yields the ascending order that
/// [`crate::Dendrogram::from_sorted_edges`] expects.
///
/// # Examples
/// ```
/// use dendro_core::LinkageEdge;
///
/// let mut edges = vec![LinkageEdge::new(0, 2, 2.0), LinkageEdge::new(0, 1, 1.0)];
/// edges.sort();
/// assert_eq!(edges[0].distance(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkageEdge {
    source: usize,
    target: usize,
    distance: f32,
}

impl LinkageEdge {
    /// Creates an edge joining `source` and `target` at `distance`.
    #[must_use]
    pub const fn new(source: usize, target: usize, distance: f32) -> Self {
        Self {
            source,
            target,
            distance,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the merge distance carried by the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> f32 { self.distance }
}

impl From<(usize, usize, f32)> for LinkageEdge {
    fn from((source, target, distance): (usize, usize, f32)) -> Self {
        Self::new(source, target, distance)
    }
}

impl Eq for LinkageEdge {}

impl Ord for LinkageEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for LinkageEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
