//! Tensor creation and initialization
//!
//! This module builds fresh tensors of a requested shape filled with a single
//! value. Every container is newly allocated; every leaf slot shares the same
//! fill value.

use std::sync::Arc;

use crate::config::NestConfig;
use crate::error::{ArgumentError, TensorResult};
use crate::types::{Extent, Tensor, TensorSeq};

/// Create a tensor of shape `extents` filled with `value`
///
/// # Arguments
///
/// * `value` - The fill value, shared by every leaf slot
/// * `extents` - One size per dimension, outermost first; must be non-empty
///
/// # Examples
///
/// ```
/// use nestrs_core::init_tensor;
///
/// let tensor = init_tensor(0, &[3, 4]).unwrap();
/// assert_eq!(tensor.to_string(), "[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]");
///
/// let branches = init_tensor("x", &[2, 0]).unwrap();
/// assert_eq!(branches.to_string(), "[[], []]");
/// ```
pub fn init_tensor<T>(value: T, extents: &[Extent]) -> TensorResult<Tensor<T>> {
    init_tensor_shared(Arc::new(value), extents)
}

/// Like [`init_tensor`], but every leaf shares the caller's `value` handle
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use nestrs_core::init_tensor_shared;
///
/// let fill = Arc::new(String::from("fill"));
/// let tensor = init_tensor_shared(Arc::clone(&fill), &[2, 2]).unwrap();
/// assert!(tensor.leaves().iter().all(|leaf| Arc::ptr_eq(leaf, &fill)));
/// ```
pub fn init_tensor_shared<T>(value: Arc<T>, extents: &[Extent]) -> TensorResult<Tensor<T>> {
    init_tensor_shared_with(value, extents, &NestConfig::default())
}

/// [`init_tensor`] with explicit configuration
pub fn init_tensor_with<T>(
    value: T,
    extents: &[Extent],
    config: &NestConfig,
) -> TensorResult<Tensor<T>> {
    init_tensor_shared_with(Arc::new(value), extents, config)
}

/// Create a tensor of shape `extents` whose leaves all share `value`.
///
/// Containers at one level are distinct allocations, never aliases of
/// one another. An extent of 0 yields an empty sequence at that level and
/// nothing is built beneath it.
///
/// # Errors
///
/// - [`TensorError::InvalidArgument`](crate::TensorError::InvalidArgument) if
///   `extents` is empty and legacy parity is off
/// - [`TensorError::ResourceExhaustion`](crate::TensorError::ResourceExhaustion)
///   if `extents.len()` exceeds `config.max_rank`
pub fn init_tensor_shared_with<T>(
    value: Arc<T>,
    extents: &[Extent],
    config: &NestConfig,
) -> TensorResult<Tensor<T>> {
    let Some((&extent, rest)) = extents.split_first() else {
        if config.legacy_parity {
            log::warn!("init_tensor called without extents, returning an empty sequence");
            return Ok(Tensor::empty());
        }
        return Err(ArgumentError::EmptyExtents.into());
    };
    config.check_rank(extents.len())?;

    log::trace!("initializing tensor with extents {:?}", extents);
    Ok(Tensor::Seq(build_level(&value, extent, rest)))
}

fn build_level<T>(value: &Arc<T>, extent: Extent, rest: &[Extent]) -> TensorSeq<T> {
    let items = (0..extent)
        .map(|_| match rest.split_first() {
            None => Tensor::Scalar(Arc::clone(value)),
            Some((&next, tail)) => Tensor::Seq(build_level(value, next, tail)),
        })
        .collect();
    TensorSeq::from_vec(items)
}
