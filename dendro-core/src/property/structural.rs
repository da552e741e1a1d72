//! Structural invariants of the dendrogram.
//!
//! For any spanning tree over `N` points the dendrogram must have:
//!
//! - **Node count** of `2N - 1`, with exactly one parentless node (the root).
//! - **Consistent links**: every child names its parent and every parent
//!   lists the child, with parents allocated after their children.
//! - **Monotone distances**: a merge is never closer than its child merges.
//! - **Additive sizes**: a merge holds the points of both children.
//! - **Complete leaves**: collecting from the root yields every point once.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Dendrogram, DendrogramError};

use super::types::TreeFixture;

/// Builds the fixture's dendrogram or fails the case with context.
pub(super) fn build(fixture: &TreeFixture) -> Result<Dendrogram, TestCaseError> {
    Dendrogram::from_edges(fixture.point_count, &fixture.edges).map_err(|error| {
        TestCaseError::fail(format!(
            "construction failed: {error} (shape={:?}, profile={:?}, points={})",
            fixture.shape, fixture.profile, fixture.point_count,
        ))
    })
}

/// Runs every structural check against the fixture.
pub(super) fn run_structural_invariants_property(fixture: &TreeFixture) -> TestCaseResult {
    let dendrogram = build(fixture)?;

    validate_node_count(&dendrogram)?;
    validate_links(&dendrogram)?;
    validate_monotone_distances(&dendrogram)?;
    validate_sizes(&dendrogram)?;
    validate_root_leaves(&dendrogram)?;
    Ok(())
}

/// Checks that input not in ascending distance order is rejected.
pub(super) fn run_unsorted_rejection_property(fixture: &TreeFixture) -> TestCaseResult {
    let mut descending = fixture.edges.clone();
    descending.sort_by(|a, b| b.distance().total_cmp(&a.distance()));
    let has_distinct = descending
        .windows(2)
        .any(|pair| pair[0].distance() > pair[1].distance());

    match Dendrogram::from_sorted_edges(fixture.point_count, &descending) {
        Err(DendrogramError::UnsortedEdges { .. }) if has_distinct => Ok(()),
        Ok(_) if !has_distinct => Ok(()),
        other => Err(TestCaseError::fail(format!(
            "descending input (distinct distances: {has_distinct}) produced {other:?}"
        ))),
    }
}

fn validate_node_count(dendrogram: &Dendrogram) -> TestCaseResult {
    let expected = 2 * dendrogram.point_count() - 1;
    if dendrogram.node_count() != expected {
        return Err(TestCaseError::fail(format!(
            "expected {expected} nodes, found {}",
            dendrogram.node_count()
        )));
    }
    let roots: Vec<usize> = dendrogram
        .parent_links()
        .enumerate()
        .filter_map(|(id, parent)| parent.is_none().then_some(id))
        .collect();
    if roots != [dendrogram.root()] {
        return Err(TestCaseError::fail(format!(
            "expected root {} to be the only parentless node, found {roots:?}",
            dendrogram.root()
        )));
    }
    Ok(())
}

fn validate_links(dendrogram: &Dendrogram) -> TestCaseResult {
    for (id, parent) in dendrogram.parent_links().enumerate() {
        let Some(parent) = parent else { continue };
        if parent <= id {
            return Err(TestCaseError::fail(format!(
                "node {id} has parent {parent} allocated before it"
            )));
        }
        let Some((left, right)) = dendrogram.children(parent) else {
            return Err(TestCaseError::fail(format!(
                "node {id} names leaf {parent} as its parent"
            )));
        };
        if left != id && right != id {
            return Err(TestCaseError::fail(format!(
                "parent {parent} does not list child {id}"
            )));
        }
    }
    Ok(())
}

fn validate_monotone_distances(dendrogram: &Dendrogram) -> TestCaseResult {
    for (id, distance) in dendrogram.merge_distances() {
        let Some((left, right)) = dendrogram.children(id) else {
            return Err(TestCaseError::fail(format!("merge {id} has no children")));
        };
        for child in [left, right] {
            if let Some(child_distance) = dendrogram.merge_distance(child)
                && child_distance > distance
            {
                return Err(TestCaseError::fail(format!(
                    "merge {id} at {distance} sits below child {child} at {child_distance}"
                )));
            }
        }
    }
    Ok(())
}

fn validate_sizes(dendrogram: &Dendrogram) -> TestCaseResult {
    for (id, node) in dendrogram.nodes().iter().enumerate() {
        let expected = match node.children() {
            Some((left, right)) => {
                dendrogram.size(left).unwrap_or(0) + dendrogram.size(right).unwrap_or(0)
            }
            None => 1,
        };
        if node.size() != expected {
            return Err(TestCaseError::fail(format!(
                "node {id} has size {} but its children hold {expected}",
                node.size()
            )));
        }
    }
    Ok(())
}

fn validate_root_leaves(dendrogram: &Dendrogram) -> TestCaseResult {
    let mut points: Vec<usize> = dendrogram
        .leaves(dendrogram.root(), 1.0)
        .into_iter()
        .map(|leaf| leaf.point)
        .collect();
    points.sort_unstable();
    let expected: Vec<usize> = (0..dendrogram.point_count()).collect();
    if points != expected {
        return Err(TestCaseError::fail(format!(
            "root leaves {points:?} do not cover every point exactly once"
        )));
    }
    Ok(())
}
