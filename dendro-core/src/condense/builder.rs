//! Top-down condensation walk over the dendrogram.

use crate::{Dendrogram, dendrogram::distance_to_lambda};

use super::{CondensedCluster, PointFallout};

pub(super) struct CondenseBuilder<'a> {
    dendrogram: &'a Dendrogram,
    min_cluster_size: usize,
    clusters: Vec<CondensedCluster>,
    fallout: Vec<Option<PointFallout>>,
}

impl<'a> CondenseBuilder<'a> {
    pub(super) fn new(dendrogram: &'a Dendrogram, min_cluster_size: usize) -> Self {
        Self {
            dendrogram,
            min_cluster_size,
            clusters: Vec::new(),
            fallout: vec![None; dendrogram.point_count()],
        }
    }

    pub(super) fn run(mut self) -> (Vec<CondensedCluster>, Vec<Option<PointFallout>>) {
        let root = self.dendrogram.root();
        let root_size = self.dendrogram.size(root).unwrap_or(0);
        if root_size < self.min_cluster_size {
            // Every point becomes noise during labelling.
            return (self.clusters, self.fallout);
        }

        self.clusters
            .push(CondensedCluster::new(root, None, 0.0, root_size));
        let mut pending = vec![(root, 0)];
        while let Some((node_id, cluster_id)) = pending.pop() {
            self.condense_node(node_id, cluster_id, &mut pending);
        }
        (self.clusters, self.fallout)
    }

    fn condense_node(&mut self, node_id: usize, cluster_id: usize, pending: &mut Vec<(usize, usize)>) {
        // Only nodes holding at least `min_cluster_size >= 2` points are
        // pushed, so every pending node is a merge.
        let Some((left, right)) = self.dendrogram.children(node_id) else {
            return;
        };

        let distance = self.dendrogram.merge_distance(node_id).unwrap_or(0.0);
        let lambda = distance_to_lambda(distance);
        let left_size = self.dendrogram.size(left).unwrap_or(0);
        let right_size = self.dendrogram.size(right).unwrap_or(0);
        let left_big = left_size >= self.min_cluster_size;
        let right_big = right_size >= self.min_cluster_size;

        match (left_big, right_big) {
            (true, true) => {
                self.close(cluster_id, lambda);
                let left_cluster = self.create_child_cluster(cluster_id, left, lambda, left_size);
                let right_cluster =
                    self.create_child_cluster(cluster_id, right, lambda, right_size);
                pending.push((right, right_cluster));
                pending.push((left, left_cluster));
            }
            (true, false) => {
                self.fall_out(right, cluster_id, distance);
                pending.push((left, cluster_id));
            }
            (false, true) => {
                self.fall_out(left, cluster_id, distance);
                pending.push((right, cluster_id));
            }
            (false, false) => {
                self.fall_out(left, cluster_id, distance);
                self.fall_out(right, cluster_id, distance);
                self.close(cluster_id, lambda);
            }
        }
    }

    fn create_child_cluster(&mut self, parent: usize, node_id: usize, lambda: f32, size: usize) -> usize {
        let child_id = self.clusters.len();
        self.clusters
            .push(CondensedCluster::new(node_id, Some(parent), lambda, size));
        let parent_cluster = &mut self.clusters[parent];
        parent_cluster.children.push(child_id);
        parent_cluster.add_stability(lambda, size);
        child_id
    }

    fn fall_out(&mut self, node_id: usize, cluster_id: usize, distance: f32) {
        let cluster = &mut self.clusters[cluster_id];
        for leaf in self.dendrogram.leaves(node_id, distance) {
            self.fallout[leaf.point] = Some(PointFallout {
                cluster: cluster_id,
                lambda: leaf.lambda,
            });
            cluster.add_stability(leaf.lambda, 1);
        }
    }

    fn close(&mut self, cluster_id: usize, lambda: f32) {
        self.clusters[cluster_id].death_lambda = lambda;
    }
}
