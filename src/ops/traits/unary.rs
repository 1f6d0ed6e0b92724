//! Unary operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Element-wise unary operations
pub trait UnaryOps {
    /// Negation: -a
    fn neg(&self, a: &Tensor<f64>) -> Result<Tensor<f64>>;

    /// Absolute value: |a|
    fn abs(&self, a: &Tensor<f64>) -> Result<Tensor<f64>>;
}
