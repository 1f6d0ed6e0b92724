//! The polynomial array value type

use super::basis::{Exponents, MonomialBasis};
use super::construct::{ConstructionOptions, DEFAULT_VARNAME, assemble};
use super::helpers::normalize_axis;
use crate::error::{Error, Result};
use crate::tensor::{Shape, Tensor, broadcast_shapes};
use std::sync::Arc;

/// N-dimensional array of multivariate polynomials
///
/// A `PolyArray` pairs a [`MonomialBasis`] with one coefficient plane per
/// basis entry. The planes are stored as a single tensor of shape
/// `[num_terms, *shape]`. Element `i` of the array is the polynomial
/// `sum_k coefficients[k][i] * monomial_k`.
///
/// Values are immutable: every operation returns a new array. Indeterminate
/// names are shared read-only between arrays derived from each other.
///
/// Equality (`==`) is structural: same names, same basis in the same order
/// and equal coefficients. Use
/// [`PolyArithmeticOps::poly_equal`](super::PolyArithmeticOps::poly_equal)
/// for element-wise mathematical equality.
///
/// # Example
///
/// ```
/// use numpoly::poly::PolyArray;
///
/// let xy = PolyArray::symbols(&["x", "y"]).unwrap();
/// assert_eq!(xy.shape(), &[2]);
/// assert_eq!(xy.num_terms(), 2);
/// assert_eq!(xy.names(), &["x".to_string(), "y".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PolyArray {
    names: Arc<[String]>,
    basis: MonomialBasis,
    coefficients: Tensor<f64>,
}

impl PolyArray {
    /// Assemble from validated parts; only the construction gate calls this
    pub(crate) fn from_parts(
        names: Arc<[String]>,
        basis: MonomialBasis,
        coefficients: Tensor<f64>,
    ) -> Self {
        Self {
            names,
            basis,
            coefficients,
        }
    }

    // ===== Constructors =====

    /// Constant polynomial array with the given values
    pub fn constant(values: &Tensor<f64>) -> Result<Self> {
        assemble(
            vec![Exponents::from_elem(0, 1)],
            values.unsqueeze(0)?,
            Arc::from(vec![format!("{DEFAULT_VARNAME}0")]),
            1,
            &ConstructionOptions::default(),
        )
    }

    /// A single indeterminate as a 0-dimensional polynomial array
    pub fn symbol(name: &str) -> Result<Self> {
        assemble(
            vec![Exponents::from_elem(1, 1)],
            Tensor::from_vec(vec![1.0], &[1])?,
            Arc::from(vec![name.to_string()]),
            1,
            &ConstructionOptions::default(),
        )
    }

    /// One-dimensional array holding one indeterminate per name
    pub fn symbols(names: &[&str]) -> Result<Self> {
        let n = names.len();
        let terms: Vec<Exponents> = (0..n)
            .map(|i| (0..n).map(|j| u32::from(i == j)).collect())
            .collect();
        let identity: Vec<f64> = (0..n * n)
            .map(|k| if k / n == k % n { 1.0 } else { 0.0 })
            .collect();
        assemble(
            terms,
            Tensor::from_vec(identity, &[n, n])?,
            names.iter().map(|s| s.to_string()).collect::<Vec<_>>().into(),
            n,
            &ConstructionOptions::default(),
        )
    }

    /// Indeterminates with generated names `q0`, `q1`, ...
    ///
    /// A single variable is returned 0-dimensional, several as a 1-D array.
    pub fn variable(count: usize) -> Result<Self> {
        let names = ConstructionOptions::default().default_names(count);
        if count == 1 {
            return Self::symbol(&names[0]);
        }
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        Self::symbols(&refs)
    }

    /// Polynomial in one indeterminate from a list of powers
    ///
    /// `powers[k]` is the power of the term whose coefficients are
    /// `coefficients[k]`.
    ///
    /// ```
    /// use numpoly::poly::PolyArray;
    /// use numpoly::tensor::Tensor;
    ///
    /// // 1 + 3*t^2
    /// let c = Tensor::<f64>::from_slice(&[1.0, 3.0], &[2]);
    /// let p = PolyArray::univariate(&[0, 2], &c, Some("t")).unwrap();
    /// assert_eq!(p.names(), &["t".to_string()]);
    /// ```
    pub fn univariate(
        powers: &[u32],
        coefficients: &Tensor<f64>,
        name: Option<&str>,
    ) -> Result<Self> {
        let grid = super::ExponentGrid::univariate(powers).expand_univariate();
        let names = name.map(|n| [n]);
        super::build(&grid, coefficients, names.as_ref().map(|n| &n[..]))
    }

    /// Build from `(exponent, coefficient plane)` pairs
    ///
    /// Planes are broadcast to a common shape. Repeated exponents are
    /// rejected like any other construction input.
    pub fn from_terms<E: AsRef<[u32]>>(
        terms: &[(E, Tensor<f64>)],
        names: Option<&[&str]>,
    ) -> Result<Self> {
        let (first, _) = terms
            .first()
            .ok_or_else(|| Error::invalid_argument("terms", "at least one term is required"))?;
        let columns = first.as_ref().len();

        let mut shape = Shape::new();
        for (_, plane) in terms {
            shape = broadcast_shapes(&shape, plane.shape())
                .ok_or_else(|| Error::broadcast(&shape, plane.shape()))?;
        }
        let planes = terms
            .iter()
            .map(|(_, plane)| plane.broadcast_to(&shape))
            .collect::<Result<Vec<_>>>()?;
        let exponents = terms
            .iter()
            .map(|(e, _)| Exponents::from_slice(e.as_ref()))
            .collect();

        let options = ConstructionOptions::default();
        let names: Vec<String> = match names {
            Some(names) => names.iter().map(|s| s.to_string()).collect(),
            None => options.default_names(columns),
        };
        assemble(
            exponents,
            Tensor::stack(&planes)?,
            Arc::from(names),
            columns,
            &options,
        )
    }

    // ===== Accessors =====

    /// Indeterminate names, in exponent column order
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The shared name list
    #[inline]
    pub fn shared_names(&self) -> &Arc<[String]> {
        &self.names
    }

    /// The monomial basis
    #[inline]
    pub fn basis(&self) -> &MonomialBasis {
        &self.basis
    }

    /// Exponent vectors in basis order
    #[inline]
    pub fn exponents(&self) -> &[Exponents] {
        self.basis.as_slice()
    }

    /// All coefficient planes, shape `[num_terms, *shape]`
    #[inline]
    pub fn coefficients(&self) -> &Tensor<f64> {
        &self.coefficients
    }

    /// Coefficient plane of basis entry `term`
    pub fn coefficient_plane(&self, term: usize) -> Result<Tensor<f64>> {
        self.coefficients.select(0, term)
    }

    /// Shape of the polynomial array
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.coefficients.shape()[1..]
    }

    /// Number of array dimensions
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Number of polynomial elements
    #[inline]
    pub fn size(&self) -> usize {
        self.shape().iter().product()
    }

    /// Number of monomials in the basis
    #[inline]
    pub fn num_terms(&self) -> usize {
        self.basis.len()
    }

    /// Number of indeterminates
    #[inline]
    pub fn num_indeterminates(&self) -> usize {
        self.names.len()
    }

    /// Whether every non-constant term has zero coefficients everywhere
    pub fn is_constant(&self) -> bool {
        self.exponents().iter().enumerate().all(|(k, exponent)| {
            exponent.iter().all(|&e| e == 0)
                || self
                    .coefficient_plane(k)
                    .map(|plane| plane.iter().all(|v| v == 0.0))
                    .unwrap_or(false)
        })
    }

    /// Values of a constant polynomial array
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any element depends on an indeterminate.
    pub fn to_tensor(&self) -> Result<Tensor<f64>> {
        if !self.is_constant() {
            return Err(Error::invalid_argument(
                "poly",
                "cannot convert a non-constant polynomial to a numeric array",
            ));
        }
        match self.basis.constant_index() {
            Some(k) => Ok(self.coefficient_plane(k)?.contiguous()),
            None => Ok(Tensor::zeros(self.shape()).contiguous()),
        }
    }

    /// The indeterminates of this array as a 1-D array of symbols
    pub fn indeterminates(&self) -> Result<Self> {
        let refs: Vec<&str> = self.names.iter().map(String::as_str).collect();
        Self::symbols(&refs)
    }

    /// Copy that shares no coefficient storage with `self`
    pub fn deep_copy(&self) -> Self {
        Self {
            names: Arc::clone(&self.names),
            basis: self.basis.clone(),
            coefficients: self.coefficients.deep_copy(),
        }
    }

    // ===== Shape manipulation =====

    /// Re-run construction on new planes over the same basis and names
    pub(crate) fn with_coefficients(&self, coefficients: Tensor<f64>) -> Result<Self> {
        self.with_coefficients_opts(coefficients, &ConstructionOptions::default())
    }

    pub(crate) fn with_coefficients_opts(
        &self,
        coefficients: Tensor<f64>,
        options: &ConstructionOptions,
    ) -> Result<Self> {
        assemble(
            self.basis.as_slice().to_vec(),
            coefficients,
            Arc::clone(&self.names),
            self.num_indeterminates(),
            options,
        )
    }

    /// Give the array a new shape with the same number of elements
    pub fn reshape(&self, shape: &[usize]) -> Result<Self> {
        let full = Shape::from([self.num_terms()]).concat(shape);
        let coefficients = self.coefficients.reshape(&full)?;
        self.with_coefficients_opts(coefficients, &ConstructionOptions::retaining())
    }

    /// Flatten to one dimension
    pub fn flatten(&self) -> Result<Self> {
        self.reshape(&[self.size()])
    }

    /// Broadcast to a larger shape
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Self> {
        let full = Shape::from([self.num_terms()]).concat(shape);
        let coefficients = self
            .coefficients
            .broadcast_to(&full)
            .map_err(|_| Error::broadcast(self.shape(), shape))?;
        self.with_coefficients_opts(coefficients, &ConstructionOptions::retaining())
    }

    /// Select one index along `axis`, removing that axis
    ///
    /// Terms and names the selected elements do not use are pruned.
    pub fn select(&self, axis: isize, index: usize) -> Result<Self> {
        let d = normalize_axis(axis, self.ndim())?;
        let coefficients = self.coefficients.select(d as isize + 1, index)?;
        self.with_coefficients(coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_is_scalar() {
        let x = PolyArray::symbol("x").unwrap();
        assert!(x.shape().is_empty());
        assert_eq!(x.exponents()[0].as_slice(), &[1]);
        assert!(!x.is_constant());
        assert!(x.to_tensor().is_err());
    }

    #[test]
    fn test_constant_round_trip() {
        let values = Tensor::<f64>::from_slice(&[13.0, 7.0], &[2]);
        let c = PolyArray::constant(&values).unwrap();
        assert!(c.is_constant());
        assert_eq!(c.names(), &["q0".to_string()]);
        assert_eq!(c.to_tensor().unwrap(), values);
    }

    #[test]
    fn test_variable_names() {
        let q = PolyArray::variable(3).unwrap();
        assert_eq!(q.names().len(), 3);
        assert_eq!(q.names()[2], "q2");
        assert!(PolyArray::variable(1).unwrap().shape().is_empty());
    }

    #[test]
    fn test_select_prunes() {
        let xy = PolyArray::symbols(&["x", "y"]).unwrap();
        let y = xy.select(0, 1).unwrap();
        assert_eq!(y, PolyArray::symbol("y").unwrap());
    }

    #[test]
    fn test_from_terms_broadcasts_planes() {
        let terms = vec![
            (vec![0u32], Tensor::<f64>::scalar(1.0)),
            (vec![1u32], Tensor::<f64>::from_slice(&[1.0, 2.0], &[2])),
        ];
        let p = PolyArray::from_terms(&terms, Some(&["x"])).unwrap();
        assert_eq!(p.shape(), &[2]);
        assert_eq!(p.coefficients().to_vec(), vec![1.0, 1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let xy = PolyArray::symbols(&["x", "y"]).unwrap();
        let copy = xy.deep_copy();
        assert_eq!(copy, xy);
        assert!(!copy.coefficients().shares_storage(xy.coefficients()));
    }

    #[test]
    fn test_reshape() {
        let q = PolyArray::variable(4).unwrap().reshape(&[2, 2]).unwrap();
        assert_eq!(q.shape(), &[2, 2]);
        assert_eq!(q.flatten().unwrap().shape(), &[4]);
    }
}
