//! Strategy builders for the property suites.
//!
//! Every fixture is derived from a `SmallRng` seed so rstest cases can pin a
//! shape and seed while proptest samples them freely.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::LinkageEdge;

use super::types::{DistanceProfile, TreeFixture, TreeShape};

/// Smallest generated dataset.
const MIN_POINTS: usize = 1;
/// Largest generated dataset.
const MAX_POINTS: usize = 96;
/// Distances shared by the `ManyTied` profile.
const TIED_DISTANCES: [f32; 4] = [0.5, 1.0, 2.0, 4.0];
/// Scale applied to intra-group edges in `Grouped` trees.
const GROUP_TIGHTNESS: f32 = 0.01;

/// Samples fixtures across every shape and distance profile.
pub(super) fn tree_fixture_strategy() -> impl Strategy<Value = TreeFixture> {
    (
        any::<TreeShape>(),
        any::<DistanceProfile>(),
        any::<u64>(),
    )
        .prop_map(|(shape, profile, seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_fixture(shape, profile, &mut rng)
        })
}

/// Generates a fixture for an explicit shape and profile.
pub(super) fn generate_fixture(
    shape: TreeShape,
    profile: DistanceProfile,
    rng: &mut SmallRng,
) -> TreeFixture {
    let point_count = rng.gen_range(MIN_POINTS..=MAX_POINTS);
    let mut edges = match shape {
        TreeShape::RandomAttach => attach_edges(point_count, profile, rng, |rng, point| {
            rng.gen_range(0..point)
        }),
        TreeShape::Chain => attach_edges(point_count, profile, rng, |_, point| point - 1),
        TreeShape::Star => attach_edges(point_count, profile, rng, |_, _| 0),
        TreeShape::Grouped => grouped_edges(point_count, profile, rng),
    };
    edges.shuffle(rng);

    let largest = (point_count / 2).max(2);
    let min_cluster_size = rng.gen_range(2..=largest);

    TreeFixture {
        point_count,
        edges,
        min_cluster_size,
        shape,
        profile,
    }
}

fn sample_distance(profile: DistanceProfile, rng: &mut SmallRng) -> f32 {
    match profile {
        DistanceProfile::Continuous => rng.gen_range(0.1_f32..100.0),
        DistanceProfile::ManyTied => TIED_DISTANCES[rng.gen_range(0..TIED_DISTANCES.len())],
        DistanceProfile::WithZeros => {
            if rng.gen_bool(0.25) {
                0.0
            } else {
                rng.gen_range(0.1_f32..10.0)
            }
        }
    }
}

/// Connects each point `1..n` to the earlier point chosen by `anchor`,
/// randomly orienting each edge.
fn attach_edges(
    point_count: usize,
    profile: DistanceProfile,
    rng: &mut SmallRng,
    mut anchor: impl FnMut(&mut SmallRng, usize) -> usize,
) -> Vec<LinkageEdge> {
    (1..point_count)
        .map(|point| {
            let other = anchor(rng, point);
            let distance = sample_distance(profile, rng);
            oriented(rng, point, other, distance)
        })
        .collect()
}

/// Splits the points into contiguous groups with tight internal edges and
/// links each group's first point to an earlier group at full scale.
fn grouped_edges(
    point_count: usize,
    profile: DistanceProfile,
    rng: &mut SmallRng,
) -> Vec<LinkageEdge> {
    let group_count = rng.gen_range(1..=point_count.clamp(1, 6));
    let mut starts: Vec<usize> = (0..group_count)
        .map(|_| rng.gen_range(0..point_count))
        .collect();
    starts.push(0);
    starts.sort_unstable();
    starts.dedup();

    let mut edges = Vec::with_capacity(point_count.saturating_sub(1));
    let mut current_start = 0;
    for point in 1..point_count {
        if starts.binary_search(&point).is_ok() {
            let other = rng.gen_range(0..point);
            let distance = sample_distance(profile, rng);
            edges.push(oriented(rng, point, other, distance));
            current_start = point;
        } else {
            let other = rng.gen_range(current_start..point);
            let distance = sample_distance(profile, rng) * GROUP_TIGHTNESS;
            edges.push(oriented(rng, point, other, distance));
        }
    }
    edges
}

fn oriented(rng: &mut SmallRng, a: usize, b: usize, distance: f32) -> LinkageEdge {
    if rng.gen_bool(0.5) {
        LinkageEdge::new(a, b, distance)
    } else {
        LinkageEdge::new(b, a, distance)
    }
}
