//! Reconstruction configuration.
//!
//! ```
//! use shamir::{Exactness, ReconstructionConfigBuilder, Selection};
//!
//! let config = ReconstructionConfigBuilder::new()
//!     .set_selection(Selection::Indices(vec![2, 5, 11]))
//!     .set_exactness(Exactness::Rational)
//!     .build()?;
//! assert_eq!(config.selection(), &Selection::Indices(vec![2, 5, 11]));
//! # Ok::<(), shamir::Error>(())
//! ```

use crate::{Error, Exactness, Result};
use std::collections::HashSet;

/// Which shares of a share set are used for the reconstruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// The first `k` shares, in the order the share set stores them.
    #[default]
    FirstK,
    /// The shares with these indices, in this order. The list must name
    /// exactly `k` shares of the share set.
    Indices(Vec<u64>),
}

/// Parameters of a reconstruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconstructionConfig {
    selection: Selection,
    exactness: Exactness,
}

impl ReconstructionConfig {
    /// Returns the share selection policy.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns how interpolation divisions are checked.
    pub fn exactness(&self) -> Exactness {
        self.exactness
    }
}

/// Builder for a [`ReconstructionConfig`].
#[derive(Debug, Clone, Default)]
pub struct ReconstructionConfigBuilder {
    selection: Selection,
    exactness: Exactness,
}

impl ReconstructionConfigBuilder {
    /// Creates a new instance of the builder, with first-k selection and
    /// rational exactness.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the share selection policy.
    pub fn set_selection(&mut self, selection: Selection) -> &mut Self {
        self.selection = selection;
        self
    }

    /// Sets how interpolation divisions are checked.
    pub fn set_exactness(&mut self, exactness: Exactness) -> &mut Self {
        self.exactness = exactness;
        self
    }

    /// Build a new [`ReconstructionConfig`]. Fails if an explicit selection is
    /// empty or repeats an index.
    pub fn build(&self) -> Result<ReconstructionConfig> {
        if let Selection::Indices(indices) = &self.selection {
            if indices.is_empty() {
                return Err(Error::InvalidSelection(
                    "at least one share index must be selected".to_string(),
                ));
            }
            let mut seen = HashSet::with_capacity(indices.len());
            if let Some(repeated) = indices.iter().find(|i| !seen.insert(**i)) {
                return Err(Error::InvalidSelection(format!(
                    "share {} is selected more than once",
                    repeated
                )));
            }
        }
        Ok(ReconstructionConfig {
            selection: self.selection.clone(),
            exactness: self.exactness,
        })
    }
}
