//! Scalar operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Operations combining a tensor with a single scalar
pub trait ScalarOps {
    /// Multiply every element by a scalar
    fn mul_scalar(&self, a: &Tensor<f64>, scalar: f64) -> Result<Tensor<f64>>;
}
