//! Reduction operations trait.

use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Tensor;

/// Reduction operations
///
/// Every reduction takes the list of dimensions to reduce over; reducing over
/// all dimensions yields a 0-dimensional tensor (or all-ones shape when
/// `keepdim` is set).
pub trait ReduceOps {
    /// Whether any element along the specified dimensions is true
    fn any(&self, a: &Tensor<bool>, dims: &[usize], keepdim: bool) -> Result<Tensor<bool>>;

    /// Number of non-zero elements along the specified dimensions
    fn count_nonzero<T: Element>(
        &self,
        a: &Tensor<T>,
        dims: &[usize],
        keepdim: bool,
    ) -> Result<Tensor<i64>>;
}
