//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! outside the measured closures.

use dendro_core::{CondenseError, DendrogramError};

use crate::tree::SyntheticTreeError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic tree generation failed.
    #[error("synthetic tree generation failed: {0}")]
    Synthetic(#[from] SyntheticTreeError),
    /// The generated edges were rejected by dendrogram construction.
    #[error("dendrogram construction failed: {0}")]
    Dendrogram(#[from] DendrogramError),
    /// The condensation parameters were rejected.
    #[error("invalid condensation parameters: {0}")]
    Condense(#[from] CondenseError),
}
