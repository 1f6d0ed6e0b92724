//! Common test utilities
#![allow(dead_code)]

use numpoly::poly::{PolyArithmeticOps, PolyArray};
use numpoly::runtime::cpu::CpuClient;
use numpoly::tensor::Tensor;

/// Create a CPU client for testing
///
/// The parallel threshold is lowered so the rayon path is exercised by small
/// inputs as well.
pub fn create_client() -> CpuClient {
    CpuClient::new().with_min_parallel_len(2)
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two polynomial arrays have the same shape and equal elements
///
/// Elements are compared mathematically, so the arrays may differ in basis
/// order or in unused indeterminates.
pub fn assert_poly_eq(client: &CpuClient, a: &PolyArray, b: &PolyArray, msg: &str) {
    assert_eq!(a.shape(), b.shape(), "{}: shape mismatch", msg);
    let equal = client.poly_equal(a, b).unwrap();
    assert!(
        equal.iter().all(|e| e),
        "{}: elements differ\n left: {:?}\nright: {:?}",
        msg,
        a,
        b
    );
}

/// A single named indeterminate
pub fn sym(name: &str) -> PolyArray {
    PolyArray::symbol(name).unwrap()
}

/// Constant polynomial array with the given values and shape
pub fn constant(values: &[f64], shape: &[usize]) -> PolyArray {
    PolyArray::constant(&Tensor::from_slice(values, shape)).unwrap()
}

/// Polynomial array from `(exponent, plane values)` pairs sharing one shape
pub fn poly(terms: &[(&[u32], &[f64])], shape: &[usize], names: &[&str]) -> PolyArray {
    let terms: Vec<(Vec<u32>, Tensor<f64>)> = terms
        .iter()
        .map(|(e, c)| (e.to_vec(), Tensor::from_slice(c, shape)))
        .collect();
    PolyArray::from_terms(&terms, Some(names)).unwrap()
}
