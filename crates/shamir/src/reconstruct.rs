//! Reconstruction of secrets from share sets.

use crate::{Error, Point, ReconstructionConfig, Result, Selection, ShareSet};
use num_bigint::BigInt;
use shamir_math::lagrange;
use tracing::{debug, info, warn};

/// Reconstruct the secret of `share_set` with the default configuration:
/// the first `k` shares, interpolated with [`crate::Exactness::Rational`].
pub fn reconstruct(share_set: &ShareSet) -> Result<BigInt> {
    Reconstructor::default().reconstruct(share_set)
}

/// Reconstructs secrets from share sets.
///
/// A reconstructor holds no state besides its configuration, so one instance
/// can serve any number of share sets, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Reconstructor {
    config: ReconstructionConfig,
}

impl Reconstructor {
    /// Create a reconstructor with the given configuration.
    pub fn new(config: ReconstructionConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ReconstructionConfig {
        &self.config
    }

    /// Decode every share of `share_set` and return the `k` points the
    /// configured selection picks, in selection order.
    pub fn select_points(&self, share_set: &ShareSet) -> Result<Vec<Point>> {
        share_set.validate()?;
        let k = share_set.threshold();

        if share_set.total_shares() != share_set.shares().len() {
            warn!(
                set = share_set.name(),
                declared = share_set.total_shares(),
                present = share_set.shares().len(),
                "share count differs from the declared total"
            );
        }

        let mut points = share_set.points()?;
        for point in &points {
            debug!(
                set = share_set.name(),
                x = %point.x(),
                bits = point.y().bits(),
                "decoded share"
            );
        }

        match self.config.selection() {
            Selection::FirstK => {
                if points.len() < k {
                    return Err(Error::ThresholdNotMet {
                        available: points.len(),
                        required: k,
                    });
                }
                points.truncate(k);
            }
            Selection::Indices(indices) => {
                if indices.len() < k {
                    return Err(Error::ThresholdNotMet {
                        available: indices.len(),
                        required: k,
                    });
                }
                if indices.len() > k {
                    return Err(Error::InvalidSelection(format!(
                        "{} shares selected but the threshold is {}",
                        indices.len(),
                        k
                    )));
                }
                points = indices
                    .iter()
                    .map(|index| {
                        share_set
                            .shares()
                            .iter()
                            .position(|s| s.index == *index)
                            .map(|i| points[i].clone())
                            .ok_or_else(|| {
                                Error::InvalidSelection(format!(
                                    "share {} is not in the share set",
                                    index
                                ))
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;
            }
        }

        debug!(
            set = share_set.name(),
            selected = ?points.iter().map(|p| p.x().to_string()).collect::<Vec<_>>(),
            "selected shares"
        );
        Ok(points)
    }

    /// Reconstruct the secret of `share_set`.
    pub fn reconstruct(&self, share_set: &ShareSet) -> Result<BigInt> {
        let points = self.select_points(share_set)?;
        let secret = lagrange::constant_term_with(&points, self.config.exactness())?;
        info!(
            set = share_set.name(),
            k = points.len(),
            bits = secret.bits(),
            "reconstructed secret"
        );
        Ok(secret)
    }
}
