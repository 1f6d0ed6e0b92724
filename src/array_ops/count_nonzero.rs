//! Counting non-zero polynomial elements

use crate::error::Result;
use crate::ops::TensorOps;
use crate::poly::PolyArray;
use crate::poly::helpers::normalize_axis;
use crate::tensor::Tensor;

/// Number of elements that are not the zero polynomial
///
/// With `axis == None` all elements are counted.
pub(crate) fn count_nonzero_impl<C: TensorOps>(
    client: &C,
    a: &PolyArray,
    axis: Option<isize>,
) -> Result<Tensor<i64>> {
    let nonzero = client.ne(a.coefficients(), &Tensor::scalar(0.0))?;
    let elements = client.any(&nonzero, &[0], false)?;
    let dims: Vec<usize> = match axis {
        None => (0..a.ndim()).collect(),
        Some(axis) => vec![normalize_axis(axis, a.ndim())?],
    };
    client.count_nonzero(&elements, &dims, false)
}
