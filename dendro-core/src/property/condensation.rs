//! Condensation and selection invariants.
//!
//! - **Purity**: condensing the same dendrogram twice gives equal trees.
//! - **Ordering**: every cluster has a larger id than its parent and holds at
//!   least `min_cluster_size` points.
//! - **Antichain**: no selected cluster descends from another.
//! - **Coverage**: each selected cluster labels exactly its own points, less
//!   the points a selected root lost before it split.
//! - **Strength bounds**: strengths lie in `[0, 1]` and noise scores `0`.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Assignment, CondensedCluster, CondensedTree, HierarchyConfig};

use super::structural::build;
use super::types::TreeFixture;

/// Runs every condensation check against the fixture.
pub(super) fn run_condensation_invariants_property(fixture: &TreeFixture) -> TestCaseResult {
    let dendrogram = build(fixture)?;
    let config = HierarchyConfig::new(fixture.min_cluster_size)
        .map_err(|error| TestCaseError::fail(format!("invalid fixture config: {error}")))?;

    let tree = CondensedTree::new(&dendrogram, &config);
    if CondensedTree::new(&dendrogram, &config) != tree {
        return Err(TestCaseError::fail("condensation is not deterministic"));
    }

    validate_cluster_order(&tree)?;
    validate_antichain(&tree)?;
    validate_coverage(&tree)?;
    validate_strengths(&tree)?;
    Ok(())
}

fn validate_cluster_order(tree: &CondensedTree) -> TestCaseResult {
    for (id, cluster) in tree.clusters().iter().enumerate() {
        if cluster.size() < tree.min_cluster_size() {
            return Err(TestCaseError::fail(format!(
                "cluster {id} holds {} points, below {}",
                cluster.size(),
                tree.min_cluster_size()
            )));
        }
        if cluster.parent().is_some_and(|parent| parent >= id) {
            return Err(TestCaseError::fail(format!(
                "cluster {id} precedes its parent {:?}",
                cluster.parent()
            )));
        }
        if cluster.death_lambda() < cluster.birth_lambda() {
            return Err(TestCaseError::fail(format!(
                "cluster {id} dies at {} before its birth at {}",
                cluster.death_lambda(),
                cluster.birth_lambda()
            )));
        }
    }
    Ok(())
}

fn validate_antichain(tree: &CondensedTree) -> TestCaseResult {
    let clusters = tree.clusters();
    for id in tree.selected_clusters() {
        let mut ancestor = clusters.get(id).and_then(CondensedCluster::parent);
        while let Some(current) = ancestor {
            if clusters.get(current).is_some_and(CondensedCluster::is_selected) {
                return Err(TestCaseError::fail(format!(
                    "selected cluster {id} descends from selected cluster {current}"
                )));
            }
            ancestor = clusters.get(current).and_then(CondensedCluster::parent);
        }
    }
    Ok(())
}

fn validate_coverage(tree: &CondensedTree) -> TestCaseResult {
    let clustering = tree.clustering();
    let selected = tree.selected_clusters();
    if selected.len() != clustering.cluster_count() {
        return Err(TestCaseError::fail(format!(
            "{} clusters selected but {} labels issued",
            selected.len(),
            clustering.cluster_count()
        )));
    }

    let mut members = vec![0_usize; clustering.cluster_count()];
    for assignment in clustering.assignments() {
        if let Assignment::Cluster(id) = assignment {
            let slot = usize::try_from(id.get())
                .ok()
                .and_then(|label| members.get_mut(label))
                .ok_or_else(|| TestCaseError::fail(format!("label {id:?} out of range")))?;
            *slot += 1;
        }
    }
    for (label, (cluster_id, count)) in selected.iter().zip(&members).enumerate() {
        let size = tree.cluster(*cluster_id).map_or(0, CondensedCluster::size)
            - early_root_fallouts(tree, *cluster_id);
        if *count != size {
            return Err(TestCaseError::fail(format!(
                "label {label} (cluster {cluster_id}) has {count} members, expected {size}"
            )));
        }
    }
    Ok(())
}

fn early_root_fallouts(tree: &CondensedTree, cluster_id: usize) -> usize {
    let Some(cluster) = tree.cluster(cluster_id).filter(|c| c.parent().is_none()) else {
        return 0;
    };
    tree.point_fallouts()
        .iter()
        .flatten()
        .filter(|record| record.cluster == cluster_id && record.lambda < cluster.death_lambda())
        .count()
}

fn validate_strengths(tree: &CondensedTree) -> TestCaseResult {
    let clustering = tree.clustering();
    for (point, (assignment, strength)) in clustering
        .assignments()
        .iter()
        .zip(clustering.membership_strengths())
        .enumerate()
    {
        let in_range = (0.0..=1.0).contains(strength);
        if !in_range || (assignment.is_noise() && *strength != 0.0) {
            return Err(TestCaseError::fail(format!(
                "point {point} ({assignment:?}) has strength {strength}"
            )));
        }
    }
    Ok(())
}
