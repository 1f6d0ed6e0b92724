//! Client trait for polynomial array functions

use crate::error::Result;
use crate::poly::PolyArray;
use crate::tensor::Tensor;

/// Array API functions over polynomial arrays
///
/// Elements are compared under the graded reverse lexicographic monomial
/// ordering: the highest monomial at which two elements differ decides.
/// Functions taking `axis: Option<isize>` work on the flattened array when
/// `axis` is `None`; negative axes count from the end.
///
/// # Example
///
/// ```
/// use numpoly::prelude::*;
///
/// let client = CpuClient::new();
/// let x = PolyArray::symbol("x")?;
/// let y = PolyArray::symbol("y")?;
/// let one = PolyArray::constant(&Tensor::scalar(1.0))?;
/// let items = numpoly::poly::stack(&[&one, &x, &y])?;
///
/// // y ranks above x
/// assert_eq!(client.poly_argmax(&items, None)?.item()?, 2);
/// assert_eq!(client.poly_minimum(&x, &y)?, x);
/// # Ok::<(), numpoly::error::Error>(())
/// ```
pub trait PolyArrayFunctions {
    /// Absolute value of every coefficient
    fn poly_absolute(&self, a: &PolyArray) -> Result<PolyArray>;

    /// Smallest element, over all elements or along `axis`
    fn poly_amin(&self, a: &PolyArray, axis: Option<isize>) -> Result<PolyArray>;

    /// Largest element, over all elements or along `axis`
    fn poly_amax(&self, a: &PolyArray, axis: Option<isize>) -> Result<PolyArray>;

    /// Index of the smallest element; the first occurrence wins ties
    fn poly_argmin(&self, a: &PolyArray, axis: Option<isize>) -> Result<Tensor<i64>>;

    /// Index of the largest element; the first occurrence wins ties
    fn poly_argmax(&self, a: &PolyArray, axis: Option<isize>) -> Result<Tensor<i64>>;

    /// Element-wise smaller of two arrays
    fn poly_minimum(&self, a: &PolyArray, b: &PolyArray) -> Result<PolyArray>;

    /// Element-wise larger of two arrays
    fn poly_maximum(&self, a: &PolyArray, b: &PolyArray) -> Result<PolyArray>;

    /// Number of elements that are not the zero polynomial
    fn poly_count_nonzero(&self, a: &PolyArray, axis: Option<isize>) -> Result<Tensor<i64>>;

    /// Stable ascending sort, over the flattened array or along `axis`
    fn poly_sort(&self, a: &PolyArray, axis: Option<isize>) -> Result<PolyArray>;
}
