//! # nestrs-core
//!
//! Nested-sequence tensors with two structural operations:
//!
//! - **Structural copy** ([`copy_tensor`]) duplicates containers down to a
//!   caller-chosen depth and shares everything below it by reference
//! - **Uniform initialization** ([`init_tensor`]) builds a fresh tensor of a
//!   given shape whose leaves all share one fill value
//!
//! ## Data Model
//!
//! A [`Tensor`] is either an opaque scalar or an ordered sequence of tensors.
//! Rank is not stored; each call states how deep to go. Siblings may be
//! ragged. Containers are shared handles ([`TensorSeq`]), so a copy that stops
//! above the leaves really does alias the original's inner sequences.
//!
//! ## Quick Start
//!
//! ```
//! use nestrs_core::{copy_tensor, init_tensor, Tensor};
//!
//! // A 3x4 matrix of zeros
//! let zeros = init_tensor(0, &[3, 4]).unwrap();
//! assert_eq!(&zeros.shape().unwrap()[..], &[3, 4]);
//!
//! // Shallow copy: new outer list, shared rows
//! let shallow = copy_tensor(&zeros, 1).unwrap();
//! shallow.get(0).unwrap().as_seq().unwrap().set(0, Tensor::scalar(1)).unwrap();
//! assert_eq!(zeros.to_string(), "[[1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]");
//!
//! // Deep copy: independent down to the leaves
//! let deep = copy_tensor(&zeros, 2).unwrap();
//! deep.get(1).unwrap().as_seq().unwrap().set(0, Tensor::scalar(2)).unwrap();
//! assert_eq!(zeros.get(1).unwrap().to_string(), "[0, 0, 0, 0]");
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`TensorResult`]. Degenerate arguments are rejected
//! unless [`NestConfig::legacy_parity`] is set:
//!
//! ```
//! use nestrs_core::{copy_tensor, init_tensor, Tensor, TensorError};
//!
//! // Depth 0 copies nothing
//! let result = copy_tensor(&Tensor::<i32>::empty(), 0);
//! assert!(matches!(result, Err(TensorError::InvalidArgument(_))));
//!
//! // Asking for more levels than the tensor has
//! let flat = Tensor::from_scalars([1, 2]);
//! assert!(matches!(copy_tensor(&flat, 2), Err(TensorError::ShapeMismatch { .. })));
//!
//! // A tensor needs at least one extent
//! assert!(init_tensor(0, &[]).is_err());
//! ```
//!
//! ## Concurrency
//!
//! [`Tensor`] is `Send + Sync` for `Send + Sync` leaves. Copies only take read
//! locks, so concurrent copies of one tensor are safe as long as nobody writes
//! to it meanwhile.
//!
//! ## Features
//!
//! - `serde`: Serialize/deserialize tensors as nested sequences

#![deny(warnings)]

pub mod config;
pub mod creation;
pub mod error;
mod macros;
pub mod structural;
pub mod types;


pub use config::{NestConfig, DEFAULT_MAX_RANK};
pub use creation::{init_tensor, init_tensor_shared, init_tensor_shared_with, init_tensor_with};
pub use error::{ArgumentError, TensorError, TensorResult};
pub use structural::{copy_tensor, copy_tensor_with};
pub use types::{Depth, Extent, Rank, Shape, Tensor, TensorSeq};
