//! Benchmark support crate for dendro.
//!
//! Provides synthetic spanning trees and parameter types used by the
//! Criterion benchmarks for dendrogram construction and condensation.

pub mod error;
pub mod params;
pub mod tree;
