//! Dendro core library.
//!
//! Turns the minimum spanning tree of a mutual-reachability graph into a
//! single-linkage [`Dendrogram`], condenses it HDBSCAN-style into a
//! [`CondensedTree`], and extracts a [`FlatClustering`] with noise.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod condense;
mod config;
mod dendrogram;
mod edge;
mod error;
mod pipeline;
mod result;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    condense::{CondensedCluster, CondensedTree, PointFallout},
    config::{ClusterSelection, HierarchyConfig},
    dendrogram::{Dendrogram, DendrogramNode, LeafLambda},
    edge::LinkageEdge,
    error::{
        CondenseError, CondenseErrorCode, DendrogramError, DendrogramErrorCode, HierarchyError,
        HierarchyErrorCode,
    },
    pipeline::extract_clusters,
    result::{Assignment, ClusterId, FlatClustering},
};
