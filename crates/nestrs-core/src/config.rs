//! Configuration shared by the copy and initialization entry points.

use crate::error::{TensorError, TensorResult};
use crate::types::Rank;

/// Default upper bound on copy depth and number of extents.
///
/// Both algorithms recurse once per level, so this bounds stack usage.
pub const DEFAULT_MAX_RANK: Rank = 512;

/// Options controlling argument validation for [`copy_tensor_with`](crate::copy_tensor_with)
/// and [`init_tensor_with`](crate::init_tensor_with).
///
/// # Examples
///
/// ```
/// use nestrs_core::NestConfig;
///
/// let config = NestConfig::new().max_rank(8).legacy_parity(true);
/// assert_eq!(config.max_rank, Some(8));
/// assert!(config.legacy_parity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestConfig {
    /// Largest accepted copy depth / extents length (default: 512, `None` = unbounded)
    pub max_rank: Option<Rank>,
    /// Accept depth 0 and empty extents, returning an empty sequence (default: false)
    pub legacy_parity: bool,
}

impl NestConfig {
    /// Create new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
    /// Set the maximum accepted rank
    pub fn max_rank(mut self, rank: Rank) -> Self {
        self.max_rank = Some(rank);
        self
    }
    /// Remove the rank limit; deep requests may then exhaust the stack
    pub fn unbounded_rank(mut self) -> Self {
        self.max_rank = None;
        self
    }
    /// Enable or disable legacy handling of degenerate arguments
    pub fn legacy_parity(mut self, enable: bool) -> Self {
        self.legacy_parity = enable;
        self
    }

    /// Check a requested rank against the configured limit.
    pub fn check_rank(&self, requested: Rank) -> TensorResult<()> {
        match self.max_rank {
            Some(limit) if requested > limit => {
                log::debug!("rejecting rank {} (limit {})", requested, limit);
                Err(TensorError::resource_exhaustion(requested, limit))
            }
            _ => Ok(()),
        }
    }
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            max_rank: Some(DEFAULT_MAX_RANK),
            legacy_parity: false,
        }
    }
}
