//! End-to-end extraction from a spanning-tree edge list.

use crate::{CondensedTree, Dendrogram, HierarchyConfig, LinkageEdge, error::HierarchyError};

/// Builds the dendrogram for `edges` and condenses it with `config`.
///
/// Edges may arrive in any order; they are sorted by distance before
/// construction. Endpoints must be point ids in `0..point_count`.
///
/// # Errors
/// Returns [`HierarchyError::Dendrogram`] when the edges do not form a valid
/// spanning tree over `point_count` points.
///
/// # Examples
/// ```
/// use dendro_core::{HierarchyConfig, LinkageEdge, extract_clusters};
///
/// let edges = [
///     LinkageEdge::new(0, 4, 5.0),
///     LinkageEdge::new(0, 1, 1.0),
///     LinkageEdge::new(0, 2, 2.0),
///     LinkageEdge::new(2, 3, 1.0),
/// ];
/// let tree = extract_clusters(5, &edges, &HierarchyConfig::new(2)?)?;
/// assert_eq!(tree.clustering().cluster_count(), 1);
/// assert!(tree.clustering().assignments()[4].is_noise());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn extract_clusters(
    point_count: usize,
    edges: &[LinkageEdge],
    config: &HierarchyConfig,
) -> Result<CondensedTree, HierarchyError> {
    let dendrogram = Dendrogram::from_edges(point_count, edges)?;
    Ok(CondensedTree::new(&dendrogram, config))
}
