//! HDBSCAN-style condensation of a single-linkage dendrogram.
//!
//! Condensation walks the dendrogram from the root with a minimum cluster
//! size:
//!
//! - When both branches of a merge reach `min_cluster_size`, the cluster
//!   ends and each branch starts a child cluster born at the merge lambda.
//! - When only one branch reaches it, the cluster continues down that branch
//!   and the points of the small branch fall out at the merge lambda.
//! - When neither branch reaches it, every remaining point falls out and the
//!   cluster ends.
//!
//! Each fallout adds `lambda - birth_lambda` to the owning cluster's
//! stability, and each child split adds that term once per child member.
//! Selection then picks an antichain of clusters and every point outside it
//! is noise. A selected root keeps only the points it still held when it
//! split.

mod builder;
mod label;
mod select;

use tracing::{debug, instrument, warn};

use crate::{Dendrogram, FlatClustering, HierarchyConfig};

use self::builder::CondenseBuilder;

/// A cluster in the condensed tree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CondensedCluster {
    dendrogram_node: usize,
    parent: Option<usize>,
    children: Vec<usize>,
    birth_lambda: f32,
    death_lambda: f32,
    stability: f32,
    size: usize,
    selected: bool,
}

impl CondensedCluster {
    fn new(dendrogram_node: usize, parent: Option<usize>, birth_lambda: f32, size: usize) -> Self {
        Self {
            dendrogram_node,
            parent,
            children: Vec::new(),
            birth_lambda,
            death_lambda: birth_lambda,
            stability: 0.0,
            size,
            selected: false,
        }
    }

    /// Dendrogram node at which the cluster was born.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dendrogram_node(&self) -> usize { self.dendrogram_node }

    /// Parent cluster id; `None` for the root cluster.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> Option<usize> { self.parent }

    /// Child cluster ids created when this cluster split.
    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Lambda at which the cluster appeared; `0` for the root cluster.
    #[must_use]
    #[rustfmt::skip]
    pub const fn birth_lambda(&self) -> f32 { self.birth_lambda }

    /// Lambda at which the cluster split or dissolved.
    #[must_use]
    #[rustfmt::skip]
    pub const fn death_lambda(&self) -> f32 { self.death_lambda }

    /// Accumulated excess-of-mass stability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stability(&self) -> f32 { self.stability }

    /// Number of points in the cluster at birth.
    #[must_use]
    #[rustfmt::skip]
    pub const fn size(&self) -> usize { self.size }

    /// Whether the cluster is part of the flat clustering.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_selected(&self) -> bool { self.selected }

    fn add_stability(&mut self, lambda: f32, count: usize) {
        // `lambda <= birth` also covers `inf - inf`, which would be NaN.
        if lambda > self.birth_lambda {
            self.stability += (lambda - self.birth_lambda) * count as f32;
        }
    }
}

/// Where a point left the condensed tree.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointFallout {
    /// Cluster the point fell out of.
    pub cluster: usize,
    /// Lambda at which it fell out.
    pub lambda: f32,
}

/// Condensed cluster hierarchy with its flat clustering.
///
/// Built once from a dendrogram and read-only afterwards. Cluster ids are
/// creation order: a parent always has a smaller id than its children and the
/// root cluster, when present, is `0`.
///
/// # Examples
/// ```
/// use dendro_core::{CondensedTree, Dendrogram, HierarchyConfig, LinkageEdge};
///
/// let edges = [
///     LinkageEdge::new(0, 1, 1.0),
///     LinkageEdge::new(2, 3, 1.0),
///     LinkageEdge::new(0, 2, 2.0),
///     LinkageEdge::new(0, 4, 5.0),
/// ];
/// let dendrogram = Dendrogram::from_sorted_edges(5, &edges)?;
/// let tree = CondensedTree::new(&dendrogram, &HierarchyConfig::new(2)?);
///
/// assert_eq!(tree.clusters().len(), 3);
/// assert_eq!(tree.cluster(0).map(|c| c.children().to_vec()), Some(vec![1, 2]));
/// assert_eq!(tree.selected_clusters(), vec![0]);
/// assert!(tree.clustering().assignments()[4].is_noise());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CondensedTree {
    min_cluster_size: usize,
    clusters: Vec<CondensedCluster>,
    fallout: Vec<Option<PointFallout>>,
    clustering: FlatClustering,
}

impl CondensedTree {
    /// Condenses `dendrogram`, selects clusters, and labels every point.
    ///
    /// A dendrogram too small to split under `min_cluster_size` produces a
    /// degenerate clustering in which every point is noise.
    #[instrument(
        name = "condense.build",
        level = "debug",
        skip_all,
        fields(
            points = dendrogram.point_count(),
            min_cluster_size = config.min_cluster_size().get(),
            selection = ?config.selection(),
        ),
    )]
    #[must_use]
    pub fn new(dendrogram: &Dendrogram, config: &HierarchyConfig) -> Self {
        let min_cluster_size = config.min_cluster_size().get();
        let (mut clusters, fallout) = CondenseBuilder::new(dendrogram, min_cluster_size).run();

        let selected = select::select_clusters(&clusters, config);
        for id in selected.iter().copied() {
            clusters[id].selected = true;
        }
        let clustering = label::label_points(&clusters, &fallout);

        debug!(
            clusters = clusters.len(),
            selected = clustering.cluster_count(),
            noise = clustering.noise_count(),
            "condensed tree constructed"
        );
        if clustering.is_degenerate() {
            warn!(
                code = "DEGENERATE_RESULT",
                points = dendrogram.point_count(),
                min_cluster_size,
                "no cluster selected; every point is noise"
            );
        }
        #[cfg(feature = "metrics")]
        {
            metrics::counter!("condensed_clusters_total").increment(clusters.len() as u64);
            metrics::counter!("selected_clusters_total")
                .increment(clustering.cluster_count() as u64);
            metrics::counter!("noise_points_total").increment(clustering.noise_count() as u64);
        }

        Self {
            min_cluster_size,
            clusters,
            fallout,
            clustering,
        }
    }

    /// Minimum cluster size used for condensation.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min_cluster_size(&self) -> usize { self.min_cluster_size }

    /// All clusters in creation order.
    #[must_use]
    pub fn clusters(&self) -> &[CondensedCluster] {
        &self.clusters
    }

    /// Returns the cluster with the given id.
    #[must_use]
    pub fn cluster(&self, id: usize) -> Option<&CondensedCluster> {
        self.clusters.get(id)
    }

    /// Ids of the selected clusters in ascending order.
    #[must_use]
    pub fn selected_clusters(&self) -> Vec<usize> {
        self.clusters
            .iter()
            .enumerate()
            .filter_map(|(id, cluster)| cluster.selected.then_some(id))
            .collect()
    }

    /// Per-point fallout record, indexed by point id; `None` when the whole
    /// dataset is below `min_cluster_size`.
    #[must_use]
    pub fn point_fallouts(&self) -> &[Option<PointFallout>] {
        &self.fallout
    }

    /// The flat clustering extracted from the selected clusters.
    #[must_use]
    pub fn clustering(&self) -> &FlatClustering {
        &self.clustering
    }

    /// Consumes the tree and returns the flat clustering.
    #[must_use]
    pub fn into_clustering(self) -> FlatClustering {
        self.clustering
    }
}
