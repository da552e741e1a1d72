//! Dendrogram construction from spanning-tree edges.
//!
//! Edges are consumed once, in order. Each edge allocates the next merge id,
//! resolves both endpoints to their partition roots through the covering
//! set, and links those roots under the new merge.

use tracing::{debug, instrument};

use crate::{LinkageEdge, error::DendrogramError};

use super::{Dendrogram, DendrogramNode, covering::CoveringSet};

impl Dendrogram {
    /// Builds a dendrogram from edges already sorted by ascending distance.
    ///
    /// # Errors
    /// Returns [`DendrogramError`] when `point_count` is zero, when the edge
    /// count is not `point_count - 1`, when a distance is negative,
    /// non-finite, or below its predecessor, when an endpoint names a node
    /// that does not exist yet, or when an edge joins points that are
    /// already connected.
    ///
    /// # Examples
    /// ```
    /// use dendro_core::{Dendrogram, DendrogramError, LinkageEdge};
    ///
    /// let unsorted = [LinkageEdge::new(0, 1, 2.0), LinkageEdge::new(1, 2, 1.0)];
    /// let err = Dendrogram::from_sorted_edges(3, &unsorted).unwrap_err();
    /// assert!(matches!(err, DendrogramError::UnsortedEdges { index: 1, .. }));
    /// ```
    #[instrument(
        name = "dendrogram.build",
        level = "debug",
        err,
        skip(edges),
        fields(point_count = point_count, edges = edges.len()),
    )]
    pub fn from_sorted_edges(
        point_count: usize,
        edges: &[LinkageEdge],
    ) -> Result<Self, DendrogramError> {
        validate_shape(point_count, edges.len())?;

        let mut builder = MergeBuilder::new(point_count);
        for (index, edge) in edges.iter().enumerate() {
            builder.push_merge(index, edge)?;
        }
        let dendrogram = builder.finish();

        debug!(
            merges = edges.len(),
            root = dendrogram.root(),
            "dendrogram constructed"
        );
        #[cfg(feature = "metrics")]
        metrics::counter!("dendrogram_builds_total").increment(1);

        Ok(dendrogram)
    }

    /// Sorts a copy of `edges` by ascending distance and builds the
    /// dendrogram.
    ///
    /// The sort is stable, so equal-distance edges keep their relative order.
    /// Endpoints that refer to merge ids only make sense for pre-sorted input;
    /// use [`Self::from_sorted_edges`] for those.
    ///
    /// # Errors
    /// Returns the same errors as [`Self::from_sorted_edges`] except
    /// [`DendrogramError::UnsortedEdges`].
    ///
    /// # Examples
    /// ```
    /// use dendro_core::{Dendrogram, LinkageEdge};
    ///
    /// let edges = [LinkageEdge::new(1, 2, 3.0), LinkageEdge::new(0, 1, 1.0)];
    /// let dendrogram = Dendrogram::from_edges(3, &edges)?;
    /// assert_eq!(dendrogram.merge_distance(3), Some(1.0));
    /// assert_eq!(dendrogram.merge_distance(4), Some(3.0));
    /// # Ok::<(), dendro_core::DendrogramError>(())
    /// ```
    pub fn from_edges(point_count: usize, edges: &[LinkageEdge]) -> Result<Self, DendrogramError> {
        let mut sorted = edges.to_vec();
        sorted.sort_by(|left, right| left.distance().total_cmp(&right.distance()));
        Self::from_sorted_edges(point_count, &sorted)
    }
}

fn validate_shape(point_count: usize, edge_count: usize) -> Result<(), DendrogramError> {
    if point_count == 0 {
        return Err(DendrogramError::EmptyDataset);
    }
    let expected = point_count - 1;
    if edge_count != expected {
        return Err(DendrogramError::EdgeCountMismatch {
            point_count,
            expected,
            actual: edge_count,
        });
    }
    Ok(())
}

struct MergeBuilder {
    point_count: usize,
    nodes: Vec<DendrogramNode>,
    covering: CoveringSet,
    previous_distance: f32,
}

impl MergeBuilder {
    fn new(point_count: usize) -> Self {
        let node_count = point_count.saturating_mul(2).saturating_sub(1);
        let mut nodes = Vec::with_capacity(node_count);
        nodes.resize(point_count, DendrogramNode::leaf());
        Self {
            point_count,
            nodes,
            covering: CoveringSet::new(node_count),
            previous_distance: 0.0,
        }
    }

    fn push_merge(&mut self, index: usize, edge: &LinkageEdge) -> Result<(), DendrogramError> {
        let distance = self.check_distance(index, edge)?;
        let merge_id = self.nodes.len();
        for node in [edge.source(), edge.target()] {
            if node >= merge_id {
                return Err(DendrogramError::EndpointOutOfRange {
                    index,
                    node,
                    limit: merge_id,
                });
            }
        }

        let left = self.covering.find(edge.source(), merge_id);
        let right = self.covering.find(edge.target(), merge_id);
        if left == right || right == merge_id {
            return Err(DendrogramError::RedundantEdge {
                index,
                source_id: edge.source(),
                target_id: edge.target(),
            });
        }

        self.covering.cover(left, right, merge_id);
        self.nodes[left].parent = Some(merge_id);
        self.nodes[right].parent = Some(merge_id);
        let size = self.nodes[left].size + self.nodes[right].size;
        self.nodes
            .push(DendrogramNode::merge(distance, left, right, size));
        self.previous_distance = distance;
        Ok(())
    }

    fn check_distance(&self, index: usize, edge: &LinkageEdge) -> Result<f32, DendrogramError> {
        let distance = edge.distance();
        if !distance.is_finite() || distance < 0.0 {
            return Err(DendrogramError::InvalidDistance {
                index,
                source_id: edge.source(),
                target_id: edge.target(),
                distance,
            });
        }
        if distance < self.previous_distance {
            return Err(DendrogramError::UnsortedEdges {
                index,
                previous: self.previous_distance,
                distance,
            });
        }
        Ok(distance)
    }

    fn finish(self) -> Dendrogram {
        Dendrogram {
            point_count: self.point_count,
            nodes: self.nodes,
        }
    }
}
