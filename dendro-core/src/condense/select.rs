//! Cluster selection over the condensed tree.
//!
//! Children always carry larger ids than their parent, so a reverse id sweep
//! visits every cluster after all of its descendants and a forward sweep
//! visits every cluster after its ancestors. The root competes under excess
//! of mass like any other cluster once it has split.

use crate::{ClusterSelection, HierarchyConfig};

use super::CondensedCluster;

const ROOT: usize = 0;

/// Returns the ids of the selected clusters in ascending order.
pub(super) fn select_clusters(clusters: &[CondensedCluster], config: &HierarchyConfig) -> Vec<usize> {
    if clusters.len() <= 1 {
        // The root never split: nothing to choose between.
        return Vec::new();
    }

    let eligible = |cluster: &CondensedCluster| {
        config
            .max_cluster_size()
            .is_none_or(|max| cluster.size <= max.get())
    };

    let mut selected = match config.selection() {
        ClusterSelection::ExcessOfMass => excess_of_mass(clusters, eligible),
        ClusterSelection::Leaf => leaves(clusters, eligible),
    };
    drop_covered_descendants(clusters, &mut selected);

    if !selected.iter().any(|flag| *flag) && eligible(&clusters[ROOT]) {
        selected[ROOT] = true;
    }

    selected
        .iter()
        .enumerate()
        .filter_map(|(id, flag)| flag.then_some(id))
        .collect()
}

fn excess_of_mass(
    clusters: &[CondensedCluster],
    eligible: impl Fn(&CondensedCluster) -> bool,
) -> Vec<bool> {
    let mut selected = vec![false; clusters.len()];
    let mut score = vec![0.0_f32; clusters.len()];
    for id in (ROOT..clusters.len()).rev() {
        let cluster = &clusters[id];
        let descendant_score: f32 = cluster.children.iter().map(|child| score[*child]).sum();
        if eligible(cluster) && cluster.stability > descendant_score {
            selected[id] = true;
            score[id] = cluster.stability;
        } else {
            score[id] = descendant_score;
        }
    }
    selected
}

fn leaves(
    clusters: &[CondensedCluster],
    eligible: impl Fn(&CondensedCluster) -> bool,
) -> Vec<bool> {
    clusters
        .iter()
        .enumerate()
        .map(|(id, cluster)| id != ROOT && cluster.children.is_empty() && eligible(cluster))
        .collect()
}

fn drop_covered_descendants(clusters: &[CondensedCluster], selected: &mut [bool]) {
    let mut covered = vec![false; clusters.len()];
    for (id, cluster) in clusters.iter().enumerate() {
        if let Some(parent) = cluster.parent {
            if selected[parent] || covered[parent] {
                covered[id] = true;
                selected[id] = false;
            }
        }
    }
}
