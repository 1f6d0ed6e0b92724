//! Client traits for polynomial operations

use super::array::PolyArray;
use super::call::{Bindings, Evaluated};
use super::ordering::MonomialOrdering;
use crate::error::Result;
use crate::tensor::Tensor;

/// Arithmetic on polynomial arrays
///
/// Operands are aligned to common names, shape and basis before the
/// coefficient planes are combined. Results are cleaned by the construction
/// gate: terms that vanish everywhere are dropped.
///
/// # Example
///
/// ```
/// use numpoly::prelude::*;
///
/// let client = CpuClient::new();
/// let x = PolyArray::symbol("x")?;
/// let y = PolyArray::symbol("y")?;
/// let sum = client.poly_add(&x, &y)?;
/// assert_eq!(sum.names(), &["x".to_string(), "y".to_string()]);
/// assert_eq!(client.poly_sub(&sum, &y)?, x);
/// # Ok::<(), numpoly::error::Error>(())
/// ```
pub trait PolyArithmeticOps {
    /// Element-wise sum
    fn poly_add(&self, a: &PolyArray, b: &PolyArray) -> Result<PolyArray>;

    /// Element-wise difference
    fn poly_sub(&self, a: &PolyArray, b: &PolyArray) -> Result<PolyArray>;

    /// Element-wise product, with monomials collected
    fn poly_mul(&self, a: &PolyArray, b: &PolyArray) -> Result<PolyArray>;

    /// Element-wise negation
    fn poly_neg(&self, a: &PolyArray) -> Result<PolyArray>;

    /// Multiply every coefficient by `factor`
    fn poly_scale(&self, a: &PolyArray, factor: f64) -> Result<PolyArray>;

    /// Element-wise integer power
    fn poly_pow(&self, a: &PolyArray, exponent: u32) -> Result<PolyArray>;

    /// Outer product of a numeric plane with a polynomial array
    ///
    /// The result has shape `plane.shape() ++ poly.shape()`.
    fn poly_outer(&self, plane: &Tensor<f64>, poly: &PolyArray) -> Result<PolyArray>;

    /// `condition ? a : b`, element-wise with broadcasting
    fn poly_where(
        &self,
        condition: &Tensor<bool>,
        a: &PolyArray,
        b: &PolyArray,
    ) -> Result<PolyArray>;

    /// Element-wise mathematical equality
    fn poly_equal(&self, a: &PolyArray, b: &PolyArray) -> Result<Tensor<bool>>;
}

/// Ordering of polynomial elements
pub trait PolyOrderingOps {
    /// Dense integer rank of every element, monotone with polynomial comparison
    ///
    /// Scalar argmin, argmax and argsort over the proxy order the polynomial
    /// elements consistently across the whole array. Equal elements share a
    /// value.
    fn sortable_proxy(&self, poly: &PolyArray, ordering: MonomialOrdering) -> Result<Tensor<i64>>;
}

/// Evaluation of polynomial arrays
pub trait PolyEvaluateOps {
    /// Substitute values for indeterminates
    ///
    /// Unbound indeterminates substitute themselves. Without bindings an
    /// independent copy is returned. A result without indeterminates is
    /// returned as [`Evaluated::Numeric`]. Otherwise the result is expressed
    /// over the names of `poly`, in their declared order, when they cover
    /// every name it uses; a polynomial declared over `[y, x]` keeps `[y, x]`.
    /// When substituted polynomials bring in new names, the result uses the
    /// naturally sorted union of the names instead.
    ///
    /// # Errors
    ///
    /// - `DuplicateBinding` when a name is bound twice
    /// - `UnknownIndeterminate` when a named value matches no name
    /// - `BroadcastError` when value shapes are incompatible
    ///
    /// # Example
    ///
    /// ```
    /// use numpoly::prelude::*;
    ///
    /// let client = CpuClient::new();
    /// let x = PolyArray::symbol("x")?;
    /// let y = PolyArray::symbol("y")?;
    /// let p = client.poly_add(&client.poly_mul(&x, &x)?, &y)?;
    ///
    /// let out = client.evaluate(&p, &Bindings::new().arg(2.0).arg(1.0))?;
    /// assert_eq!(out.as_numeric().unwrap().item()?, 5.0);
    /// # Ok::<(), numpoly::error::Error>(())
    /// ```
    fn evaluate(&self, poly: &PolyArray, bindings: &Bindings) -> Result<Evaluated>;
}
