//! Property-based tests for dendrogram construction and condensation.
//!
//! Random spanning trees of varied shape and distance profile are fed
//! through the whole pipeline. Structural properties check the merge tree
//! (node count, single root, monotone distances, additive sizes), and
//! condensation properties check purity, antichain selection, and label
//! coverage.

mod condensation;
mod strategies;
mod structural;
mod types;
