//! Single-linkage dendrogram built from an ascending spanning-tree edge list.
//!
//! A spanning tree over `N` points becomes a binary merge tree with `2N - 1`
//! nodes stored in one flat arena: ids `0..N` are the points and id `N + i`
//! is the merge created by the `i`-th edge. The last merge is the root.
//! Parent and child links are plain ids, fixed once construction finishes.

mod build;
mod covering;

/// A node in the dendrogram arena.
///
/// Leaves carry a distance of `0` and no children. Merge nodes always carry
/// both children.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DendrogramNode {
    distance: f32,
    left: Option<usize>,
    right: Option<usize>,
    parent: Option<usize>,
    size: usize,
}

impl DendrogramNode {
    const fn leaf() -> Self {
        Self {
            distance: 0.0,
            left: None,
            right: None,
            parent: None,
            size: 1,
        }
    }

    const fn merge(distance: f32, left: usize, right: usize, size: usize) -> Self {
        Self {
            distance,
            left: Some(left),
            right: Some(right),
            parent: None,
            size,
        }
    }

    /// Returns the merge distance, or `None` for leaves.
    #[must_use]
    pub fn merge_distance(&self) -> Option<f32> {
        self.children().map(|_| self.distance)
    }

    /// Returns the `(left, right)` child ids of a merge node.
    #[must_use]
    pub fn children(&self) -> Option<(usize, usize)> {
        self.left.zip(self.right)
    }

    /// Returns the id of the merge that absorbed this node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> Option<usize> { self.parent }

    /// Returns the number of points under this node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn size(&self) -> usize { self.size }

    /// Returns `true` for point nodes.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A point paired with the lambda (`1 / distance`) at which it left a
/// subtree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafLambda {
    /// Point id.
    pub point: usize,
    /// Reciprocal of the supplied distance; `+inf` for a zero distance.
    pub lambda: f32,
}

/// Immutable binary merge tree over `point_count` points.
///
/// # Examples
/// ```
/// use dendro_core::{Dendrogram, LinkageEdge};
///
/// let edges = [LinkageEdge::new(0, 1, 1.0), LinkageEdge::new(1, 2, 3.0)];
/// let dendrogram = Dendrogram::from_sorted_edges(3, &edges)?;
/// assert_eq!(dendrogram.node_count(), 5);
/// assert_eq!(dendrogram.root(), 4);
/// assert_eq!(dendrogram.children(4), Some((3, 2)));
/// assert_eq!(dendrogram.size(4), Some(3));
/// # Ok::<(), dendro_core::DendrogramError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dendrogram {
    point_count: usize,
    nodes: Vec<DendrogramNode>,
}

impl Dendrogram {
    /// Number of points (leaves).
    #[must_use]
    #[rustfmt::skip]
    pub const fn point_count(&self) -> usize { self.point_count }

    /// Total number of nodes, `2 * point_count - 1`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Id of the root node.
    ///
    /// For a single point the root is the point itself.
    #[must_use]
    pub fn root(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Returns the node stored under `id`.
    #[must_use]
    pub fn node(&self, id: usize) -> Option<&DendrogramNode> {
        self.nodes.get(id)
    }

    /// Returns the whole node arena, indexed by id.
    #[must_use]
    pub fn nodes(&self) -> &[DendrogramNode] {
        &self.nodes
    }

    /// Returns the parent id of `id`; `None` for the root or unknown ids.
    #[must_use]
    pub fn parent(&self, id: usize) -> Option<usize> {
        self.node(id).and_then(DendrogramNode::parent)
    }

    /// Returns the child ids of merge node `id`.
    #[must_use]
    pub fn children(&self, id: usize) -> Option<(usize, usize)> {
        self.node(id).and_then(DendrogramNode::children)
    }

    /// Returns the subtree size of `id`.
    #[must_use]
    pub fn size(&self, id: usize) -> Option<usize> {
        self.node(id).map(DendrogramNode::size)
    }

    /// Returns the merge distance of `id`, or `None` for leaves and unknown
    /// ids.
    #[must_use]
    pub fn merge_distance(&self, id: usize) -> Option<f32> {
        self.node(id).and_then(DendrogramNode::merge_distance)
    }

    /// Parent link of every node in id order.
    pub fn parent_links(&self) -> impl ExactSizeIterator<Item = Option<usize>> + '_ {
        self.nodes.iter().map(DendrogramNode::parent)
    }

    /// `(id, distance)` for every merge node in id order.
    pub fn merge_distances(&self) -> impl ExactSizeIterator<Item = (usize, f32)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .skip(self.point_count)
            .map(|(id, node)| (id, node.distance))
    }

    /// Collects every leaf under `node_id`, each paired with
    /// `1 / distance`.
    ///
    /// `distance` is the scale at which the caller considers the subtree to
    /// detach, normally the distance of `node_id`'s parent. Leaves are
    /// returned left subtree first and each appears exactly once. Unknown ids
    /// yield an empty list.
    ///
    /// # Examples
    /// ```
    /// use dendro_core::{Dendrogram, LinkageEdge};
    ///
    /// let edges = [LinkageEdge::new(0, 1, 1.0), LinkageEdge::new(1, 2, 4.0)];
    /// let dendrogram = Dendrogram::from_sorted_edges(3, &edges)?;
    /// let leaves = dendrogram.leaves(dendrogram.root(), 4.0);
    /// let points: Vec<_> = leaves.iter().map(|leaf| leaf.point).collect();
    /// assert_eq!(points, vec![0, 1, 2]);
    /// assert!(leaves.iter().all(|leaf| leaf.lambda == 0.25));
    /// # Ok::<(), dendro_core::DendrogramError>(())
    /// ```
    #[must_use]
    pub fn leaves(&self, node_id: usize, distance: f32) -> Vec<LeafLambda> {
        let Some(start) = self.nodes.get(node_id) else {
            return Vec::new();
        };
        let lambda = distance_to_lambda(distance);
        let mut leaves = Vec::with_capacity(start.size);
        let mut stack = vec![node_id];
        while let Some(current) = stack.pop() {
            match self.children(current) {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => leaves.push(LeafLambda {
                    point: current,
                    lambda,
                }),
            }
        }
        leaves
    }
}

/// Converts a merge distance to a density scale.
pub(crate) fn distance_to_lambda(distance: f32) -> f32 {
    if distance == 0.0 {
        f32::INFINITY
    } else {
        distance.recip()
    }
}
