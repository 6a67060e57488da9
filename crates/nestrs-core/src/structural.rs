//! Depth-bounded structural copy.
//!
//! [`copy_tensor`] duplicates containers from the outermost level down to a
//! requested depth and shares everything below it by reference. A depth equal
//! to the tensor's rank is a full deep copy of the structure (leaf values are
//! always shared); a smaller depth is a shallow copy.
//!
//! # Examples
//!
//! ```
//! use nestrs_core::{copy_tensor, tensor, Tensor};
//!
//! let original: Tensor<i32> = tensor!([[1, 2], [3, 4]]);
//!
//! // Shallow: the rows are the same objects as in the original
//! let shallow = copy_tensor(&original, 1).unwrap();
//! assert!(!shallow.ptr_eq(&original));
//! assert!(shallow.get(0).unwrap().ptr_eq(&original.get(0).unwrap()));
//!
//! // Deep: every container is fresh
//! let deep = copy_tensor(&original, 2).unwrap();
//! assert_eq!(deep, original);
//! assert!(!deep.get(0).unwrap().ptr_eq(&original.get(0).unwrap()));
//! ```

use crate::config::NestConfig;
use crate::error::{ArgumentError, TensorError, TensorResult};
use crate::types::{Depth, Tensor, TensorSeq};

/// Copy `original`, duplicating containers down to `depth` levels.
///
/// Uses [`NestConfig::default`]. See [`copy_tensor_with`].
pub fn copy_tensor<T>(original: &Tensor<T>, depth: Depth) -> TensorResult<Tensor<T>> {
    copy_tensor_with(original, depth, &NestConfig::default())
}

/// Copy `original`, duplicating containers down to `depth` levels.
///
/// With `depth == 1` a new outer sequence holds the original elements by
/// reference. With `depth > 1` each element is itself copied with `depth - 1`.
/// `original` is never mutated.
///
/// # Errors
///
/// - [`TensorError::InvalidArgument`] if `depth == 0` and legacy parity is off
/// - [`TensorError::ResourceExhaustion`] if `depth` exceeds `config.max_rank`
/// - [`TensorError::ShapeMismatch`] if a scalar is found above the requested depth
///
/// # Examples
///
/// ```
/// use nestrs_core::{copy_tensor_with, tensor, NestConfig, Tensor, TensorError};
///
/// let t: Tensor<i32> = tensor!([1, 2, 3]);
///
/// let strict = copy_tensor_with(&t, 0, &NestConfig::default());
/// assert!(matches!(strict, Err(TensorError::InvalidArgument(_))));
///
/// let legacy = copy_tensor_with(&t, 0, &NestConfig::new().legacy_parity(true)).unwrap();
/// assert_eq!(legacy, Tensor::empty());
/// ```
pub fn copy_tensor_with<T>(
    original: &Tensor<T>,
    depth: Depth,
    config: &NestConfig,
) -> TensorResult<Tensor<T>> {
    if depth == 0 {
        if config.legacy_parity {
            log::warn!("copy_tensor called with depth 0, returning an empty sequence");
            return Ok(Tensor::empty());
        }
        return Err(ArgumentError::ZeroDepth.into());
    }
    config.check_rank(depth)?;

    log::trace!("copying tensor to depth {}", depth);
    copy_level(original, depth, 0).map(Tensor::Seq)
}

fn copy_level<T>(node: &Tensor<T>, depth: Depth, level: usize) -> TensorResult<TensorSeq<T>> {
    let seq = node
        .as_seq()
        .ok_or_else(|| TensorError::shape_mismatch(level, depth))?;
    let elements = seq.to_vec();

    if depth == 1 {
        return Ok(TensorSeq::from_vec(elements));
    }

    let copied = elements
        .iter()
        .map(|element| copy_level(element, depth - 1, level + 1).map(Tensor::Seq))
        .collect::<TensorResult<Vec<_>>>()?;
    Ok(TensorSeq::from_vec(copied))
}
