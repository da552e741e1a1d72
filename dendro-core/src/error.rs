//! Error types for the dendro core library.
//!
//! Construction failures are split by stage: [`DendrogramError`] covers
//! malformed edge lists, [`CondenseError`] covers invalid condensation
//! parameters, and [`HierarchyError`] wraps both for the end-to-end
//! [`crate::extract_clusters`] pipeline. Every enum exposes a stable
//! machine-readable code.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Malformed edge list supplied to [`crate::Dendrogram`] construction.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DendrogramError {
    /// A dendrogram needs at least one point.
    #[error("cannot build a dendrogram over zero points")]
    EmptyDataset,
    /// A spanning tree over `point_count` points has exactly `point_count - 1`
    /// edges.
    #[error("expected {expected} edges for {point_count} points but got {actual}")]
    EdgeCountMismatch {
        /// Number of points the caller declared.
        point_count: usize,
        /// Edge count required for a spanning tree.
        expected: usize,
        /// Edge count actually supplied.
        actual: usize,
    },
    /// An edge distance was negative, NaN or infinite.
    #[error("edge {index} ({source_id}, {target_id}) has invalid distance {distance}")]
    InvalidDistance {
        /// Position of the edge in processing order.
        index: usize,
        /// First endpoint of the offending edge.
        source_id: usize,
        /// Second endpoint of the offending edge.
        target_id: usize,
        /// Distance observed on the edge.
        distance: f32,
    },
    /// Edge distances decreased between consecutive edges.
    #[error("edge {index} has distance {distance} below the preceding distance {previous}")]
    UnsortedEdges {
        /// Position of the edge that broke the ascending order.
        index: usize,
        /// Distance of the preceding edge.
        previous: f32,
        /// Distance of the offending edge.
        distance: f32,
    },
    /// An endpoint named a node that does not exist yet.
    #[error("edge {index} references node {node}, but only ids below {limit} exist at that point")]
    EndpointOutOfRange {
        /// Position of the offending edge.
        index: usize,
        /// Endpoint id that was out of range.
        node: usize,
        /// Exclusive upper bound on valid endpoint ids for this edge.
        limit: usize,
    },
    /// Both endpoints already belong to the same partition, so the edge list
    /// is not a spanning tree (a cycle, duplicate coverage, or a disconnected
    /// point set).
    #[error("edge {index} ({source_id}, {target_id}) joins points that are already connected")]
    RedundantEdge {
        /// Position of the offending edge.
        index: usize,
        /// First endpoint of the offending edge.
        source_id: usize,
        /// Second endpoint of the offending edge.
        target_id: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DendrogramError`] variants.
    enum DendrogramErrorCode for DendrogramError {
        /// A dendrogram needs at least one point.
        EmptyDataset => EmptyDataset => "DENDROGRAM_EMPTY_DATASET",
        /// The edge count did not match `point_count - 1`.
        EdgeCountMismatch => EdgeCountMismatch { .. } => "DENDROGRAM_EDGE_COUNT_MISMATCH",
        /// An edge distance was negative or non-finite.
        InvalidDistance => InvalidDistance { .. } => "DENDROGRAM_INVALID_DISTANCE",
        /// Edge distances were not in ascending order.
        UnsortedEdges => UnsortedEdges { .. } => "DENDROGRAM_UNSORTED_EDGES",
        /// An endpoint named a node that does not exist yet.
        EndpointOutOfRange => EndpointOutOfRange { .. } => "DENDROGRAM_ENDPOINT_OUT_OF_RANGE",
        /// An edge joined an already-connected partition.
        RedundantEdge => RedundantEdge { .. } => "DENDROGRAM_REDUNDANT_EDGE",
    }
}

/// Invalid parameters supplied to condensation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CondenseError {
    /// `min_cluster_size` must be at least two.
    #[error("min_cluster_size must be at least 2 (got {got})")]
    InvalidMinClusterSize {
        /// The rejected value.
        got: usize,
    },
    /// `max_cluster_size` must not be below `min_cluster_size`.
    #[error("max_cluster_size {max_cluster_size} is below min_cluster_size {min_cluster_size}")]
    InvalidMaxClusterSize {
        /// Configured minimum cluster size.
        min_cluster_size: usize,
        /// The rejected maximum.
        max_cluster_size: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`CondenseError`] variants.
    enum CondenseErrorCode for CondenseError {
        /// `min_cluster_size` was below two.
        InvalidMinClusterSize => InvalidMinClusterSize { .. } => "CONDENSE_INVALID_MIN_CLUSTER_SIZE",
        /// `max_cluster_size` was below `min_cluster_size`.
        InvalidMaxClusterSize => InvalidMaxClusterSize { .. } => "CONDENSE_INVALID_MAX_CLUSTER_SIZE",
    }
}

/// Error returned by the end-to-end [`crate::extract_clusters`] pipeline.
///
/// `extract_clusters` itself only fails with [`HierarchyError::Dendrogram`]:
/// its [`crate::HierarchyConfig`] was validated when it was built.
/// [`HierarchyError::Condense`] lets callers build the configuration and run
/// the pipeline in one function, chaining both steps with `?`.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HierarchyError {
    /// The edge list could not be turned into a dendrogram.
    #[error(transparent)]
    Dendrogram(#[from] DendrogramError),
    /// The condensation parameters were rejected while building a
    /// [`crate::HierarchyConfig`].
    #[error(transparent)]
    Condense(#[from] CondenseError),
}

define_error_codes! {
    /// Stable codes describing [`HierarchyError`] variants.
    enum HierarchyErrorCode for HierarchyError {
        /// Dendrogram construction failed.
        InvalidInput => Dendrogram(..) => "HIERARCHY_INVALID_INPUT",
        /// Condensation parameters were rejected.
        InvalidParameter => Condense(..) => "HIERARCHY_INVALID_PARAMETER",
    }
}

impl HierarchyError {
    /// Retrieve the inner [`DendrogramErrorCode`] when construction failed on
    /// the edge list.
    #[must_use]
    pub const fn dendrogram_code(&self) -> Option<DendrogramErrorCode> {
        match self {
            Self::Dendrogram(error) => Some(error.code()),
            Self::Condense(_) => None,
        }
    }
}
