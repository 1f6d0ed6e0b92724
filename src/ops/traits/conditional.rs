//! Conditional operations trait.

use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Tensor;

/// Conditional operations
pub trait ConditionalOps {
    /// Conditional select: where(cond, x, y) = cond ? x : y
    ///
    /// `cond`, `x` and `y` are broadcast against each other; the output has
    /// the common shape of all three.
    fn where_cond<T: Element>(
        &self,
        cond: &Tensor<bool>,
        x: &Tensor<T>,
        y: &Tensor<T>,
    ) -> Result<Tensor<T>>;
}
