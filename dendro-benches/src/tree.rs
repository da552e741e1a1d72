//! Synthetic spanning trees with planted cluster structure.
//!
//! Points are split into at most `cluster_count` contiguous blocks of equal
//! length. Within a block each point attaches to a random earlier point of
//! the same block at a short distance drawn from a narrow band. The first
//! point of every later block attaches to a random earlier point at a long
//! distance. Condensing the resulting tree recovers the blocks.

use dendro_core::LinkageEdge;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Range of intra-block edge distances.
const INTRA_DISTANCE: std::ops::Range<f32> = 0.9..1.0;
/// Lower bound on inter-block edge distances.
const INTER_DISTANCE: f32 = 50.0;

/// Errors returned when a synthetic tree cannot be generated.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticTreeError {
    /// A tree needs at least one point.
    #[error("point_count must be positive")]
    ZeroPoints,
    /// A tree needs at least one block.
    #[error("cluster_count must be positive")]
    ZeroClusters,
    /// Every block needs at least one point.
    #[error("cluster_count {cluster_count} exceeds point_count {point_count}")]
    TooManyClusters {
        /// Requested number of points.
        point_count: usize,
        /// Requested number of blocks.
        cluster_count: usize,
    },
}

/// Configuration for [`SyntheticTree::generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticTreeConfig {
    /// Number of points.
    pub point_count: usize,
    /// Number of planted blocks.
    pub cluster_count: usize,
    /// RNG seed.
    pub seed: u64,
}

/// A spanning tree sorted by ascending distance.
#[derive(Clone, Debug)]
pub struct SyntheticTree {
    point_count: usize,
    edges: Vec<LinkageEdge>,
}

impl SyntheticTree {
    /// Generates a tree for `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticTreeError`] when the point or block counts are zero
    /// or when there are more blocks than points.
    ///
    /// # Examples
    /// ```
    /// use dendro_benches::tree::{SyntheticTree, SyntheticTreeConfig};
    ///
    /// let tree = SyntheticTree::generate(&SyntheticTreeConfig {
    ///     point_count: 10,
    ///     cluster_count: 2,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(tree.edges().len(), 9);
    /// # Ok::<(), dendro_benches::tree::SyntheticTreeError>(())
    /// ```
    pub fn generate(config: &SyntheticTreeConfig) -> Result<Self, SyntheticTreeError> {
        let SyntheticTreeConfig {
            point_count,
            cluster_count,
            seed,
        } = *config;
        if point_count == 0 {
            return Err(SyntheticTreeError::ZeroPoints);
        }
        if cluster_count == 0 {
            return Err(SyntheticTreeError::ZeroClusters);
        }
        if cluster_count > point_count {
            return Err(SyntheticTreeError::TooManyClusters {
                point_count,
                cluster_count,
            });
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let block_len = point_count.div_ceil(cluster_count);
        let mut edges = Vec::with_capacity(point_count - 1);
        for point in 1..point_count {
            let block_start = point - point % block_len;
            let edge = if point == block_start {
                let distance = rng.gen_range(INTER_DISTANCE..INTER_DISTANCE * 2.0);
                LinkageEdge::new(rng.gen_range(0..point), point, distance)
            } else {
                let distance = rng.gen_range(INTRA_DISTANCE);
                LinkageEdge::new(rng.gen_range(block_start..point), point, distance)
            };
            edges.push(edge);
        }
        edges.sort_by(|a, b| a.distance().total_cmp(&b.distance()));

        Ok(Self { point_count, edges })
    }

    /// Number of points in the tree.
    #[must_use]
    pub const fn point_count(&self) -> usize {
        self.point_count
    }

    /// Edges in ascending distance order.
    #[must_use]
    pub fn edges(&self) -> &[LinkageEdge] {
        &self.edges
    }
}
