//! Core type definitions for nested tensors.
//!
//! This module defines the data model shared by both algorithms:
//!
//! - Type aliases for rank, copy depth and extents ([`Rank`], [`Depth`], [`Extent`], [`Shape`])
//! - The recursive tensor value ([`Tensor`])
//! - A shared, mutable sequence handle ([`TensorSeq`])
//!
//! Rank is never stored on a tensor. Callers state it per call, and the
//! algorithms trust it until they meet a scalar where a sequence is needed.
//!
//! # Sharing
//!
//! Cloning a [`Tensor`] or a [`TensorSeq`] clones a handle, not the data.
//! Two handles that are [`ptr_eq`](Tensor::ptr_eq) observe each other's writes:
//!
//! ```
//! use nestrs_core::{tensor, Tensor};
//!
//! let matrix: Tensor<i32> = tensor!([[1, 2], [3, 4]]);
//! let alias = matrix.clone();
//! assert!(alias.ptr_eq(&matrix));
//!
//! let row = matrix.get(0).unwrap();
//! row.as_seq().unwrap().set(0, Tensor::scalar(9)).unwrap();
//! assert_eq!(alias, tensor!([[9, 2], [3, 4]]));
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use smallvec::SmallVec;

use crate::error::{TensorError, TensorResult};

/// Type alias for tensor rank (nesting depth).
///
/// Supplied by the caller; a rank-2 tensor is a sequence of sequences of scalars.
pub type Rank = usize;

/// Type alias for the number of outer levels a structural copy duplicates.
pub type Depth = usize;

/// Type alias for the size of one dimension.
pub type Extent = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for tensors with up to 6 dimensions.
///
/// # Examples
///
/// ```
/// use nestrs_core::{init_tensor, Shape};
///
/// let tensor = init_tensor(0u8, &[2, 3, 4]).unwrap();
/// let shape: Shape = tensor.shape().unwrap();
/// assert_eq!(&shape[..], &[2, 3, 4]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;

/// A recursively nested tensor.
///
/// A rank-0 tensor is an opaque scalar, a rank-N tensor is an ordered sequence
/// of rank-(N-1) tensors. Siblings may have different shapes.
pub enum Tensor<T> {
    /// Opaque leaf value, shared by reference
    Scalar(Arc<T>),
    /// Ordered sequence of sub-tensors
    Seq(TensorSeq<T>),
}

/// Handle to a shared, mutable ordered sequence of tensors.
///
/// Every clone of a handle refers to the same container. A sequence may
/// appear several times inside one tensor, but never inside itself: formatting,
/// equality, [`Tensor::shape`] and [`Tensor::leaves`] recurse without a cycle
/// check, and a cyclic handle is never freed.
pub struct TensorSeq<T> {
    items: Arc<RwLock<Vec<Tensor<T>>>>,
}

impl<T> TensorSeq<T> {
    /// Create a new empty sequence
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create a new empty sequence with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Wrap already-built elements in a fresh container
    pub fn from_vec(items: Vec<Tensor<T>>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether the sequence has no elements
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Handle to the element at `index`, shared with this container
    pub fn get(&self, index: usize) -> Option<Tensor<T>> {
        self.items.read().get(index).cloned()
    }

    /// Replace the element at `index`, returning the previous one.
    ///
    /// The write is visible through every handle to this container.
    /// `value` must not contain this sequence; tensors stay acyclic.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::IndexOutOfBounds`] if `index >= len`.
    pub fn set(&self, index: usize, value: Tensor<T>) -> TensorResult<Tensor<T>> {
        let mut items = self.items.write();
        let len = items.len();
        match items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(TensorError::index_out_of_bounds(index, len)),
        }
    }

    /// Append an element; like [`set`](Self::set), `value` must not contain this sequence
    pub fn push(&self, value: Tensor<T>) {
        self.items.write().push(value);
    }

    /// Snapshot of the element handles.
    ///
    /// The read lock is released before returning, so callers may recurse
    /// into the elements without holding it.
    pub fn to_vec(&self) -> Vec<Tensor<T>> {
        self.items.read().clone()
    }

    /// Whether both handles refer to the same container
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T> Clone for TensorSeq<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for TensorSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tensor<T> {
    /// Create a rank-0 tensor owning `value`
    pub fn scalar(value: T) -> Self {
        Tensor::Scalar(Arc::new(value))
    }

    /// Create a rank-0 tensor sharing an existing value
    pub fn shared_scalar(value: Arc<T>) -> Self {
        Tensor::Scalar(value)
    }

    /// Create a sequence from already-built elements
    ///
    /// # Examples
    ///
    /// ```
    /// use nestrs_core::Tensor;
    ///
    /// let row = Tensor::from_scalars([1, 2]);
    /// let matrix = Tensor::from_elements(vec![row.clone(), row]);
    /// assert_eq!(matrix.to_string(), "[[1, 2], [1, 2]]");
    /// ```
    pub fn from_elements(elements: Vec<Tensor<T>>) -> Self {
        Tensor::Seq(TensorSeq::from_vec(elements))
    }

    /// Create a rank-1 tensor, one scalar per value
    pub fn from_scalars<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_elements(values.into_iter().map(Tensor::scalar).collect())
    }

    /// Create an empty sequence
    pub fn empty() -> Self {
        Tensor::Seq(TensorSeq::new())
    }

    /// Whether this is a rank-0 scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, Tensor::Scalar(_))
    }

    /// Whether this is a sequence
    pub fn is_seq(&self) -> bool {
        matches!(self, Tensor::Seq(_))
    }

    /// The shared leaf value, or `None` for a sequence
    pub fn as_scalar(&self) -> Option<&Arc<T>> {
        match self {
            Tensor::Scalar(value) => Some(value),
            Tensor::Seq(_) => None,
        }
    }

    /// The sequence handle, or `None` for a scalar
    pub fn as_seq(&self) -> Option<&TensorSeq<T>> {
        match self {
            Tensor::Seq(seq) => Some(seq),
            Tensor::Scalar(_) => None,
        }
    }

    /// Number of elements, or `None` for a scalar
    pub fn len(&self) -> Option<usize> {
        self.as_seq().map(TensorSeq::len)
    }

    /// Handle to the element at `index`; `None` for scalars or out-of-range indices
    pub fn get(&self, index: usize) -> Option<Tensor<T>> {
        self.as_seq()?.get(index)
    }

    /// Identity comparison: same container or same scalar allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Tensor::Scalar(a), Tensor::Scalar(b)) => Arc::ptr_eq(a, b),
            (Tensor::Seq(a), Tensor::Seq(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// All leaf values in depth-first order
    pub fn leaves(&self) -> Vec<Arc<T>> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<Arc<T>>) {
        match self {
            Tensor::Scalar(value) => out.push(Arc::clone(value)),
            Tensor::Seq(seq) => {
                for item in seq.to_vec() {
                    item.collect_leaves(out);
                }
            }
        }
    }

    /// Extents of a regular tensor, outermost first.
    ///
    /// Returns `None` when siblings disagree (ragged nesting). A scalar has an
    /// empty shape. An empty sequence reports `[0]`, since nothing below it
    /// records further extents.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestrs_core::{tensor, Tensor};
    ///
    /// let regular: Tensor<i32> = tensor!([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(&regular.shape().unwrap()[..], &[2, 3]);
    ///
    /// let ragged: Tensor<i32> = tensor!([[1], [2, 3]]);
    /// assert!(ragged.shape().is_none());
    /// ```
    pub fn shape(&self) -> Option<Shape> {
        let seq = match self {
            Tensor::Scalar(_) => return Some(Shape::new()),
            Tensor::Seq(seq) => seq,
        };

        let items = seq.to_vec();
        let mut inner: Option<Shape> = None;
        for item in &items {
            let item_shape = item.shape()?;
            match &inner {
                None => inner = Some(item_shape),
                Some(expected) if *expected == item_shape => {}
                Some(_) => return None,
            }
        }

        let mut shape = Shape::new();
        shape.push(items.len());
        if let Some(inner) = inner {
            shape.extend(inner);
        }
        Some(shape)
    }

    /// Method form of [`copy_tensor`](crate::copy_tensor).
    pub fn copy_to_depth(&self, depth: Depth) -> TensorResult<Self> {
        crate::structural::copy_tensor(self, depth)
    }

    /// Method form of [`init_tensor`](crate::init_tensor).
    pub fn full(value: T, extents: &[Extent]) -> TensorResult<Self> {
        crate::creation::init_tensor(value, extents)
    }
}

impl<T> Clone for Tensor<T> {
    fn clone(&self) -> Self {
        match self {
            Tensor::Scalar(value) => Tensor::Scalar(Arc::clone(value)),
            Tensor::Seq(seq) => Tensor::Seq(seq.clone()),
        }
    }
}

impl<T> From<TensorSeq<T>> for Tensor<T> {
    fn from(seq: TensorSeq<T>) -> Self {
        Tensor::Seq(seq)
    }
}

impl<T> From<Vec<Tensor<T>>> for Tensor<T> {
    fn from(elements: Vec<Tensor<T>>) -> Self {
        Self::from_elements(elements)
    }
}

impl<T: PartialEq> PartialEq for TensorSeq<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        // Snapshot both sides so no lock is held while recursing
        self.to_vec() == other.to_vec()
    }
}

impl<T: Eq> Eq for TensorSeq<T> {}

impl<T: PartialEq> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Tensor::Scalar(a), Tensor::Scalar(b)) => Arc::ptr_eq(a, b) || **a == **b,
            (Tensor::Seq(a), Tensor::Seq(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Tensor<T> {}

impl<T: fmt::Debug> fmt::Debug for TensorSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec().iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tensor::Scalar(value) => fmt::Debug::fmt(&**value, f),
            Tensor::Seq(seq) => fmt::Debug::fmt(seq, f),
        }
    }
}

impl<T: fmt::Display> fmt::Display for TensorSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.to_vec().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Display> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tensor::Scalar(value) => write!(f, "{}", value),
            Tensor::Seq(seq) => fmt::Display::fmt(seq, f),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::{Tensor, TensorSeq};
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T: Serialize> Serialize for TensorSeq<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let items = self.to_vec();
            let mut seq = serializer.serialize_seq(Some(items.len()))?;
            for item in &items {
                seq.serialize_element(item)?;
            }
            seq.end()
        }
    }

    impl<T: Serialize> Serialize for Tensor<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Tensor::Scalar(value) => (**value).serialize(serializer),
                Tensor::Seq(seq) => seq.serialize(serializer),
            }
        }
    }

    // Arrays become sequences, anything else a scalar
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Seq(Vec<Tensor<T>>),
        Scalar(T),
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Tensor<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Ok(match Repr::<T>::deserialize(deserializer)? {
                Repr::Seq(items) => Tensor::from_elements(items),
                Repr::Scalar(value) => Tensor::scalar(value),
            })
        }
    }
}
