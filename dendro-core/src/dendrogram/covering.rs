//! Covering-id disjoint set used while a dendrogram is being built.
//!
//! Every id (point or merge) stores the merge that most recently absorbed
//! it. Merges are created in ascending id order, so the newest covering id
//! reached from any member is the current root of its partition. Lookups
//! re-point every id they visit at the merge being created, which keeps
//! later walks short without a rank or size heuristic.

#[derive(Clone, Debug)]
pub(super) struct CoveringSet {
    covering: Vec<Option<usize>>,
}

impl CoveringSet {
    pub(super) fn new(id_count: usize) -> Self {
        Self {
            covering: vec![None; id_count],
        }
    }

    /// Returns the partition root for `start`, re-pointing every id on the
    /// walk at `merge_id`.
    ///
    /// The root itself is left untouched until [`Self::cover`] runs. A second
    /// lookup in the same partition for the same `merge_id` stops early and
    /// returns `merge_id`, which callers treat as "already connected".
    pub(super) fn find(&mut self, start: usize, merge_id: usize) -> usize {
        let mut node = start;
        while let Some(next) = self.covering[node] {
            self.covering[node] = Some(merge_id);
            node = next;
        }
        node
    }

    /// Records `merge_id` as the covering id of both partition roots.
    pub(super) fn cover(&mut self, left_root: usize, right_root: usize, merge_id: usize) {
        self.covering[left_root] = Some(merge_id);
        self.covering[right_root] = Some(merge_id);
    }
}
