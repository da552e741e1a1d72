//! Configuration for condensation and cluster selection.

use std::num::NonZeroUsize;

use crate::error::CondenseError;

/// Strategy used to pick the flat clustering from the condensed tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClusterSelection {
    /// Excess of mass: keep a cluster when its stability beats the combined
    /// stability of its selected descendants.
    #[default]
    ExcessOfMass,
    /// Keep every cluster that never splits into child clusters.
    Leaf,
}

/// Validated parameters for [`crate::CondensedTree::new`].
///
/// `min_cluster_size` has no default: callers must choose it.
///
/// # Examples
/// ```
/// use dendro_core::{ClusterSelection, HierarchyConfig};
///
/// let config = HierarchyConfig::new(5)?
///     .with_selection(ClusterSelection::Leaf)
///     .with_max_cluster_size(40)?;
/// assert_eq!(config.min_cluster_size().get(), 5);
/// assert_eq!(config.selection(), ClusterSelection::Leaf);
/// assert_eq!(config.max_cluster_size().map(|size| size.get()), Some(40));
/// # Ok::<(), dendro_core::CondenseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchyConfig {
    min_cluster_size: NonZeroUsize,
    max_cluster_size: Option<NonZeroUsize>,
    selection: ClusterSelection,
}

impl HierarchyConfig {
    /// Creates a configuration with the given minimum cluster size.
    ///
    /// # Errors
    /// Returns [`CondenseError::InvalidMinClusterSize`] when
    /// `min_cluster_size < 2`.
    pub fn new(min_cluster_size: usize) -> Result<Self, CondenseError> {
        let size = NonZeroUsize::new(min_cluster_size)
            .filter(|size| size.get() >= 2)
            .ok_or(CondenseError::InvalidMinClusterSize {
                got: min_cluster_size,
            })?;
        Ok(Self {
            min_cluster_size: size,
            max_cluster_size: None,
            selection: ClusterSelection::default(),
        })
    }

    /// Sets the selection strategy.
    #[must_use]
    pub const fn with_selection(mut self, selection: ClusterSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Caps the size of clusters eligible for selection.
    ///
    /// # Errors
    /// Returns [`CondenseError::InvalidMaxClusterSize`] when `max_cluster_size`
    /// is below the configured minimum.
    pub fn with_max_cluster_size(mut self, max_cluster_size: usize) -> Result<Self, CondenseError> {
        let size = NonZeroUsize::new(max_cluster_size)
            .filter(|size| *size >= self.min_cluster_size)
            .ok_or(CondenseError::InvalidMaxClusterSize {
                min_cluster_size: self.min_cluster_size.get(),
                max_cluster_size,
            })?;
        self.max_cluster_size = Some(size);
        Ok(self)
    }

    /// Returns the minimum cluster size.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min_cluster_size(&self) -> NonZeroUsize { self.min_cluster_size }

    /// Returns the maximum selectable cluster size, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_cluster_size(&self) -> Option<NonZeroUsize> { self.max_cluster_size }

    /// Returns the selection strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn selection(&self) -> ClusterSelection { self.selection }
}
