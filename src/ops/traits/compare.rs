//! Comparison operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Element-wise comparisons producing boolean masks
///
/// Comparisons broadcast like [`BinaryOps`](super::BinaryOps). NaN compares
/// unequal to everything, including itself.
pub trait CompareOps {
    /// Element-wise equality: a == b
    fn eq(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<bool>>;

    /// Element-wise inequality: a != b
    fn ne(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<bool>>;

    /// Element-wise less than: a < b
    fn lt(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<bool>>;

    /// Element-wise greater than: a > b
    fn gt(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<bool>>;
}
