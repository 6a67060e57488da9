//! Basic nested tensor usage
//!
//! Run with:
//! ```bash
//! cargo run --example basic_nesting
//! ```

use anyhow::Result;
use nestrs_core::{copy_tensor, init_tensor, tensor, NestConfig, Tensor};

fn main() -> Result<()> {
    println!("=== Uniform initialization ===\n");

    let matrix = init_tensor(0, &[3, 4])?;
    println!("init_tensor(0, [3, 4]) = {}", matrix);

    let cube = init_tensor(0, &[2, 3, 4])?;
    println!("init_tensor(0, [2, 3, 4]) = {}", cube);

    let branches = init_tensor("x", &[2, 0])?;
    println!("init_tensor(\"x\", [2, 0]) = {}", branches);

    println!("\n=== Structural copy ===\n");

    let p: Tensor<i32> = tensor!([[1, 2], [3, 4]]);
    let shallow = copy_tensor(&p, 1)?;
    let deep = copy_tensor(&p, 2)?;

    if let Some(row) = p.get(0).and_then(|row| row.as_seq().cloned()) {
        row.set(0, Tensor::scalar(100))?;
    }
    println!("original after p[0][0] = 100: {}", p);
    println!("shallow copy (depth 1):       {}", shallow);
    println!("deep copy (depth 2):          {}", deep);

    println!("\n=== Errors ===\n");

    match copy_tensor(&p, 3) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("copy_tensor(p, 3): {}", e),
    }

    let legacy = NestConfig::new().legacy_parity(true);
    let empty = nestrs_core::copy_tensor_with(&p, 0, &legacy)?;
    println!("legacy copy_tensor(p, 0) = {}", empty);

    Ok(())
}
