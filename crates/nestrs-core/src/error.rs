//! Error types for nested tensor operations
//!
//! # Design
//!
//! - **`TensorError`**: Top-level enum covering every failure of the copy and
//!   initialization algorithms and of handle mutation
//! - **`ArgumentError`**: Caller contract violations detected before any work is done
//!
//! # Examples
//!
//! ```
//! use nestrs_core::error::{ArgumentError, TensorError};
//!
//! fn validate_extents(extents: &[usize]) -> Result<(), TensorError> {
//!     if extents.is_empty() {
//!         return Err(TensorError::InvalidArgument(ArgumentError::EmptyExtents));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_extents(&[]).is_err());
//! assert!(validate_extents(&[3, 4]).is_ok());
//! ```

use thiserror::Error;

/// Top-level error type for nested tensor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// A scalar was found where the requested depth needed a sequence
    #[error(
        "Shape mismatch: expected a sequence at nesting level {level} \
         ({remaining_depth} level(s) left to copy), found a scalar"
    )]
    ShapeMismatch {
        level: usize,
        remaining_depth: usize,
    },

    /// Degenerate arguments rejected up front
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// Requested rank exceeds the configured recursion limit
    #[error("Resource exhaustion: requested rank {requested} exceeds the limit of {limit}")]
    ResourceExhaustion { requested: usize, limit: usize },

    /// Write through a sequence handle past its end
    #[error("Index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Caller contract violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Copy depth must be at least 1")]
    ZeroDepth,

    #[error("Extents cannot be empty")]
    EmptyExtents,
}

/// Result type alias for nested tensor operations
pub type TensorResult<T> = Result<T, TensorError>;

// Convenience constructors for common error patterns
impl TensorError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(level: usize, remaining_depth: usize) -> Self {
        TensorError::ShapeMismatch {
            level,
            remaining_depth,
        }
    }

    /// Create a resource exhaustion error
    pub fn resource_exhaustion(requested: usize, limit: usize) -> Self {
        TensorError::ResourceExhaustion { requested, limit }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        TensorError::IndexOutOfBounds { index, len }
    }

    /// Whether this error is a caller contract violation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TensorError::InvalidArgument(_))
    }
}
