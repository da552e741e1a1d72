//! Shared test utilities for `dendro-core`.

use dendro_test_support::proptest_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Dendrogram, LinkageEdge};

/// Builds the proptest configuration for a suite, honouring the
/// `PROGTEST_CASES` and `DENDRO_PBT_FORK` overrides.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestRunProfile::load(default_cases).into_config()
}

/// Converts `(source, target, distance)` triples into edges.
pub(crate) fn edges(raw: &[(usize, usize, f32)]) -> Vec<LinkageEdge> {
    raw.iter().copied().map(LinkageEdge::from).collect()
}

/// Builds a dendrogram from already-sorted triples, panicking on invalid
/// input.
pub(crate) fn dendrogram(point_count: usize, raw: &[(usize, usize, f32)]) -> Dendrogram {
    Dendrogram::from_sorted_edges(point_count, &edges(raw)).expect("valid spanning tree")
}
