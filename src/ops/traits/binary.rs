//! Binary operations trait.
//!
//! This trait defines element-wise binary operations on tensors.

use crate::error::Result;
use crate::tensor::Tensor;

/// Element-wise binary operations on tensors.
///
/// All binary operations support broadcasting:
/// - Dimensions are compared element-wise, from the trailing dimensions backward
/// - Two dimensions are compatible when they are equal, or when one of them is 1
/// - Dimensions of size 1 are stretched to match the other dimension
/// - The output has shape equal to the pairwise maximum of the input shapes
///
/// # Example
///
/// ```
/// use numpoly::prelude::*;
///
/// let client = CpuClient::new();
/// let a = Tensor::<f64>::from_slice(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
/// let b = Tensor::<f64>::from_slice(&[10.0, 20.0], &[2]);
///
/// let c = client.add(&a, &b)?;
/// assert_eq!(c.to_vec(), vec![11.0, 22.0, 13.0, 24.0]);
/// # Ok::<(), numpoly::error::Error>(())
/// ```
pub trait BinaryOps {
    /// Element-wise addition: a + b
    fn add(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<f64>>;

    /// Element-wise subtraction: a - b
    fn sub(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<f64>>;

    /// Element-wise multiplication: a * b
    ///
    /// Outer products are expressed as a multiplication of operands reshaped
    /// so their non-shared dimensions have size 1.
    fn mul(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<f64>>;
}
