//! Sorting operations trait.

use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Tensor;

/// Sorting operations
pub trait SortingOps {
    /// Return indices that would sort the tensor along a dimension.
    ///
    /// The sort is stable: equal elements keep their relative order, in both
    /// ascending and descending mode.
    ///
    /// # Returns
    ///
    /// I64 tensor with same shape as input, containing indices that would sort the tensor.
    ///
    /// # Example
    ///
    /// ```
    /// # use numpoly::prelude::*;
    /// let client = CpuClient::new();
    /// let a = Tensor::<f64>::from_slice(&[3.0, 1.0, 4.0], &[3]);
    /// let indices = client.argsort(&a, 0, false)?;
    /// assert_eq!(indices.to_vec(), vec![1, 0, 2]);
    /// # Ok::<(), numpoly::error::Error>(())
    /// ```
    fn argsort<T: Element>(&self, a: &Tensor<T>, dim: isize, descending: bool)
    -> Result<Tensor<i64>>;
}
