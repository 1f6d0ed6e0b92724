//! Indexing operations trait.

use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Tensor;

/// Indexing operations
pub trait IndexingOps {
    /// Argmax: returns indices of maximum values along a dimension.
    ///
    /// With `dim == None` the index is into the flattened tensor. On ties the
    /// index of the first occurrence is returned.
    ///
    /// # Arguments
    ///
    /// * `a` - Input tensor
    /// * `dim` - Dimension along which to find the maximum index (negative counts from the end)
    /// * `keepdim` - If true, the reduced dimension is retained with size 1
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the reduced extent is empty.
    fn argmax<T: Element>(
        &self,
        a: &Tensor<T>,
        dim: Option<isize>,
        keepdim: bool,
    ) -> Result<Tensor<i64>>;

    /// Argmin: returns indices of minimum values along a dimension.
    ///
    /// Same conventions as [`IndexingOps::argmax`].
    fn argmin<T: Element>(
        &self,
        a: &Tensor<T>,
        dim: Option<isize>,
        keepdim: bool,
    ) -> Result<Tensor<i64>>;

    /// Gather values along a dimension using an index tensor.
    ///
    /// For a 3-D input and `dim == 1`:
    /// `out[i][j][k] = a[i][index[i][j][k]][k]`
    ///
    /// `index` must have the same rank as `a` and may not exceed `a` along
    /// any dimension other than `dim`. The output has the shape of `index`.
    fn gather<T: Element>(&self, a: &Tensor<T>, dim: isize, index: &Tensor<i64>)
    -> Result<Tensor<T>>;
}
