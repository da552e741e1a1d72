//! Point labelling and membership strength.

use crate::{Assignment, ClusterId, FlatClustering};

use super::{CondensedCluster, PointFallout};

const ROOT: usize = 0;

pub(super) fn label_points(
    clusters: &[CondensedCluster],
    fallout: &[Option<PointFallout>],
) -> FlatClustering {
    let mut next_label = 0_u64;
    let mut owner: Vec<Option<ClusterId>> = Vec::with_capacity(clusters.len());
    for cluster in clusters {
        let own = cluster.selected.then(|| {
            let label = ClusterId::new(next_label);
            next_label += 1;
            label
        });
        // Parents precede children, so the parent's owner is already known.
        let inherited = cluster.parent.and_then(|parent| owner[parent]);
        owner.push(own.or(inherited));
    }
    let cluster_count = usize::try_from(next_label).unwrap_or(usize::MAX);

    let threshold = root_threshold(clusters);
    let assignments: Vec<Assignment> = fallout
        .iter()
        .map(|record| {
            record
                .filter(|record| record.cluster != ROOT || record.lambda >= threshold)
                .and_then(|record| owner[record.cluster])
                .map_or(Assignment::Noise, Assignment::Cluster)
        })
        .collect();

    let mut max_lambda = vec![0.0_f32; cluster_count];
    for (assignment, record) in assignments.iter().zip(fallout) {
        if let (Assignment::Cluster(id), Some(record)) = (assignment, record) {
            let slot = &mut max_lambda[label_index(*id)];
            *slot = slot.max(record.lambda);
        }
    }

    let strengths = assignments
        .iter()
        .zip(fallout)
        .map(|(assignment, record)| match (assignment, record) {
            (Assignment::Cluster(id), Some(record)) => {
                membership_strength(record.lambda, max_lambda[label_index(*id)])
            }
            _ => 0.0,
        })
        .collect();

    FlatClustering::new(assignments, strengths, cluster_count)
}

/// Points that left a selected root before it split are noise; a selected
/// root only claims what it still held at its death lambda.
fn root_threshold(clusters: &[CondensedCluster]) -> f32 {
    clusters
        .get(ROOT)
        .filter(|root| root.selected)
        .map_or(f32::NEG_INFINITY, |root| root.death_lambda)
}

fn label_index(id: ClusterId) -> usize {
    usize::try_from(id.get()).unwrap_or(usize::MAX)
}

fn membership_strength(lambda: f32, max_lambda: f32) -> f32 {
    if max_lambda == 0.0 {
        1.0
    } else if max_lambda.is_infinite() {
        if lambda.is_infinite() { 1.0 } else { 0.0 }
    } else {
        lambda.min(max_lambda) / max_lambda
    }
}
