//! # nestrs - Nested-Sequence Tensors
//!
//! This is the **meta crate** that re-exports the nestrs components for convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use nestrs::prelude::*;
//!
//! let grid = init_tensor(0, &[3, 4])?;
//! assert_eq!(grid.to_string(), "[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]");
//!
//! let p: Tensor<i32> = tensor!([[1, 2], [3, 4]]);
//! let shallow = copy_tensor(&p, 1)?;
//! assert!(shallow.get(0).unwrap().ptr_eq(&p.get(0).unwrap()));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core ([`core`])
//!
//! Tensor data model, structural copy, uniform initialization, configuration
//! and errors.
//!
//! ```
//! use nestrs::core::{copy_tensor_with, NestConfig, Tensor};
//!
//! let t = Tensor::from_scalars([1, 2, 3]);
//! let config = NestConfig::new().max_rank(16);
//! let copy = copy_tensor_with(&t, 1, &config).unwrap();
//! assert_eq!(copy, t);
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialize/deserialize tensors as nested sequences

#![deny(warnings)]

pub use nestrs_core as core;
pub use nestrs_core::tensor;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use nestrs::prelude::*;
    //!
    //! let t: Tensor<u8> = init_tensor(1, &[2]).unwrap();
    //! assert_eq!(t, Tensor::from_scalars([1, 1]));
    //! ```

    pub use crate::core::{
        copy_tensor, copy_tensor_with, init_tensor, init_tensor_shared, init_tensor_with,
        NestConfig, Tensor, TensorError, TensorResult, TensorSeq,
    };
    pub use crate::tensor;
}
