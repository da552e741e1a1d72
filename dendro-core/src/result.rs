//! Flat clustering output produced by condensation.
//!
//! A [`FlatClustering`] maps every point either to one selected cluster or to
//! noise, alongside a per-point membership strength.

/// Identifier assigned to a selected cluster.
///
/// Identifiers are contiguous from zero in the order the clusters were
/// created during condensation.
///
/// # Examples
/// ```
/// use dendro_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

/// Outcome for a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Assignment {
    /// The point belongs to the selected cluster with this id.
    Cluster(ClusterId),
    /// The point is not covered by any selected cluster.
    Noise,
}

impl Assignment {
    /// Returns the cluster id, or `None` for noise.
    #[must_use]
    pub const fn cluster(self) -> Option<ClusterId> {
        match self {
            Self::Cluster(id) => Some(id),
            Self::Noise => None,
        }
    }

    /// Returns `true` when the point is noise.
    #[must_use]
    pub const fn is_noise(self) -> bool {
        matches!(self, Self::Noise)
    }
}

/// Point-to-cluster assignment extracted from a condensed tree.
///
/// # Examples
/// ```
/// use dendro_core::{Dendrogram, HierarchyConfig, LinkageEdge, CondensedTree};
///
/// let edges = [
///     LinkageEdge::new(0, 1, 1.0),
///     LinkageEdge::new(2, 3, 1.0),
///     LinkageEdge::new(0, 2, 2.0),
///     LinkageEdge::new(0, 4, 5.0),
/// ];
/// let dendrogram = Dendrogram::from_sorted_edges(5, &edges)?;
/// let config = HierarchyConfig::new(2)?;
/// let tree = CondensedTree::new(&dendrogram, &config);
/// let clustering = tree.clustering();
/// assert!(clustering.assignments()[4].is_noise());
/// assert_eq!(clustering.noise_count(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatClustering {
    assignments: Vec<Assignment>,
    strengths: Vec<f32>,
    cluster_count: usize,
}

impl FlatClustering {
    pub(crate) fn new(assignments: Vec<Assignment>, strengths: Vec<f32>, cluster_count: usize) -> Self {
        Self {
            assignments,
            strengths,
            cluster_count,
        }
    }

    /// Returns the per-point assignments indexed by point id.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Returns per-point membership strengths in `[0, 1]`; noise points are
    /// `0`.
    #[must_use]
    pub fn membership_strengths(&self) -> &[f32] {
        &self.strengths
    }

    /// Number of selected clusters.
    #[must_use]
    pub const fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Number of points labelled noise.
    #[must_use]
    pub fn noise_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_noise()).count()
    }

    /// Returns `true` when no cluster was selected and every point is noise.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.cluster_count == 0
    }

    /// Returns contiguous labels: `0..k` for the `k` selected clusters and
    /// `k` for noise.
    ///
    /// When every point is noise the noise label is `0`.
    #[must_use]
    pub fn to_labels(&self) -> Vec<usize> {
        self.assignments
            .iter()
            .map(|assignment| match assignment {
                Assignment::Cluster(id) => usize::try_from(id.get()).unwrap_or(usize::MAX),
                Assignment::Noise => self.cluster_count,
            })
            .collect()
    }
}
