//! Integration tests for nestrs-core
//!
//! These tests exercise the public API end to end: sharing semantics of the
//! structural copy, shapes produced by the initializer, and concurrent use.

use std::sync::Arc;
use std::thread;

use nestrs_core::{
    copy_tensor, copy_tensor_with, init_tensor, init_tensor_with, tensor, ArgumentError,
    NestConfig, Tensor, TensorError,
};

fn set(tensor: &Tensor<i32>, index: usize, value: Tensor<i32>) {
    tensor.as_seq().unwrap().set(index, value).unwrap();
}

#[test]
fn test_init_three_by_four() {
    let tensor = init_tensor(0, &[3, 4]).unwrap();
    assert_eq!(
        tensor.to_string(),
        "[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]"
    );
}

#[test]
fn test_init_two_by_three_by_four() {
    let tensor = init_tensor(0, &[2, 3, 4]).unwrap();
    let row = "[0, 0, 0, 0]";
    let plane = format!("[{row}, {row}, {row}]");
    assert_eq!(tensor.to_string(), format!("[{plane}, {plane}]"));
}

#[test]
fn test_init_with_empty_inner_extent() {
    let tensor = init_tensor("x", &[2, 0]).unwrap();
    assert_eq!(tensor, tensor!([[], []]));
}

#[test]
fn test_shallow_copy_sees_original_row_mutation() {
    let original: Tensor<i32> = tensor!([[1, 2], [3, 4]]);
    let shallow = copy_tensor(&original, 1).unwrap();

    // Mutating a row of the original is visible through the copy
    set(&original.get(0).unwrap(), 0, Tensor::scalar(10));
    assert_eq!(shallow, tensor!([[10, 2], [3, 4]]));

    // Replacing a top-level slot of the copy is not visible in the original
    set(&shallow, 1, tensor!([5, 6]));
    assert_eq!(original, tensor!([[10, 2], [3, 4]]));
    assert_eq!(shallow, tensor!([[10, 2], [5, 6]]));
}

#[test]
fn test_deep_copy_is_fully_independent() {
    let original: Tensor<i32> = tensor!([[1, 2], [3, 4]]);
    let deep = copy_tensor(&original, 2).unwrap();

    set(&original, 0, tensor!([9]));
    set(&original.get(1).unwrap(), 1, Tensor::scalar(40));

    assert_eq!(deep, tensor!([[1, 2], [3, 4]]));
    assert_eq!(original, tensor!([[9], [3, 40]]));
}

#[test]
fn test_partial_depth_on_rank_three() {
    let original: Tensor<i32> = tensor!([[[1, 2], [3]], [[4]]]);
    let copy = copy_tensor(&original, 2).unwrap();

    // Levels 0 and 1 are fresh
    let copied_plane = copy.get(0).unwrap();
    let original_plane = original.get(0).unwrap();
    assert!(!copied_plane.ptr_eq(&original_plane));

    // Level 2 (innermost rows) is shared
    let copied_row = copied_plane.get(0).unwrap();
    let original_row = original_plane.get(0).unwrap();
    assert!(copied_row.ptr_eq(&original_row));

    set(&original_row, 1, Tensor::scalar(20));
    assert_eq!(copy, tensor!([[[1, 20], [3]], [[4]]]));

    set(&original_plane, 1, tensor!([30]));
    assert_eq!(copy, tensor!([[[1, 20], [3]], [[4]]]));
}

#[test]
fn test_copy_of_initialized_tensor() {
    let fill = Arc::new(vec![1u8, 2, 3]);
    let tensor = nestrs_core::init_tensor_shared(Arc::clone(&fill), &[2, 2]).unwrap();
    let copy = copy_tensor(&tensor, 2).unwrap();

    assert_eq!(copy, tensor);
    assert!(copy.leaves().iter().all(|leaf| Arc::ptr_eq(leaf, &fill)));
}

#[test]
fn test_error_variants() {
    let flat: Tensor<i32> = tensor!([1, 2]);

    assert_eq!(
        copy_tensor(&flat, 0).unwrap_err(),
        TensorError::InvalidArgument(ArgumentError::ZeroDepth)
    );
    assert_eq!(
        copy_tensor(&flat, 2).unwrap_err(),
        TensorError::ShapeMismatch {
            level: 1,
            remaining_depth: 1
        }
    );
    assert_eq!(
        init_tensor(0, &[]).unwrap_err(),
        TensorError::InvalidArgument(ArgumentError::EmptyExtents)
    );
}

#[test]
fn test_legacy_parity_config() {
    let config = NestConfig::new().legacy_parity(true);
    let flat: Tensor<i32> = tensor!([1, 2]);

    assert_eq!(copy_tensor_with(&flat, 0, &config).unwrap(), Tensor::empty());
    assert_eq!(init_tensor_with(0, &[], &config).unwrap(), Tensor::empty());

    // Shape mismatches are still errors in legacy mode
    assert!(copy_tensor_with(&flat, 2, &config).is_err());
}

#[test]
fn test_rank_guard() {
    let config = NestConfig::new().max_rank(4);
    let err = init_tensor_with(0, &[1; 5], &config).unwrap_err();
    assert_eq!(err, TensorError::ResourceExhaustion { requested: 5, limit: 4 });

    let unbounded = NestConfig::new().unbounded_rank();
    let deep = init_tensor_with(0, &[1; 600], &unbounded).unwrap();
    assert_eq!(deep.leaves().len(), 1);
}

#[test]
fn test_concurrent_copies_of_shared_tensor() {
    let original = init_tensor(1u64, &[8, 8, 8]).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (1..=3)
            .map(|depth| {
                let original = &original;
                scope.spawn(move || copy_tensor(original, depth).unwrap())
            })
            .collect();

        for handle in handles {
            let copy = handle.join().unwrap();
            assert_eq!(copy, original);
            assert!(!copy.ptr_eq(&original));
        }
    });
}
