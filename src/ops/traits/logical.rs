//! Logical operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Element-wise boolean mask algebra
pub trait LogicalOps {
    /// Logical AND: a && b
    fn logical_and(&self, a: &Tensor<bool>, b: &Tensor<bool>) -> Result<Tensor<bool>>;

    /// Logical OR: a || b
    fn logical_or(&self, a: &Tensor<bool>, b: &Tensor<bool>) -> Result<Tensor<bool>>;

    /// Logical NOT: !a
    fn logical_not(&self, a: &Tensor<bool>) -> Result<Tensor<bool>>;
}
