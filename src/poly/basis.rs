//! Monomial basis and raw exponent grids

use crate::error::{ConstructionError, Result};
use crate::tensor::Shape;
use smallvec::SmallVec;
use std::ops::Index;

/// Exponent vector of one monomial, one power per indeterminate
pub type Exponents = SmallVec<[u32; 4]>;

/// Ordered sequence of distinct exponent vectors
///
/// Every vector has exactly [`MonomialBasis::num_indeterminates`] entries.
/// A basis is only created by the construction gate, which establishes both
/// invariants; this type offers read-only access.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MonomialBasis {
    terms: Vec<Exponents>,
    nvars: usize,
}

impl MonomialBasis {
    pub(crate) fn new_unchecked(terms: Vec<Exponents>, nvars: usize) -> Self {
        debug_assert!(terms.iter().all(|t| t.len() == nvars));
        Self { terms, nvars }
    }

    /// Number of monomials
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the basis holds no monomial
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of entries in each exponent vector
    #[inline]
    pub fn num_indeterminates(&self) -> usize {
        self.nvars
    }

    /// Exponent vectors in basis order
    #[inline]
    pub fn as_slice(&self) -> &[Exponents] {
        &self.terms
    }

    /// Iterate over the exponent vectors
    pub fn iter(&self) -> std::slice::Iter<'_, Exponents> {
        self.terms.iter()
    }

    /// Position of an exponent vector in the basis
    pub fn position(&self, exponent: &[u32]) -> Option<usize> {
        self.terms.iter().position(|t| t.as_slice() == exponent)
    }

    /// Total degree of each monomial
    pub fn grades(&self) -> Vec<u32> {
        self.terms.iter().map(|t| t.iter().sum()).collect()
    }

    /// Index of the all-zero exponent vector, if present
    pub fn constant_index(&self) -> Option<usize> {
        self.terms.iter().position(|t| t.iter().all(|&e| e == 0))
    }
}

impl Index<usize> for MonomialBasis {
    type Output = Exponents;

    fn index(&self, index: usize) -> &Exponents {
        &self.terms[index]
    }
}

impl<'a> IntoIterator for &'a MonomialBasis {
    type Item = &'a Exponents;
    type IntoIter = std::slice::Iter<'a, Exponents>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Raw exponent input to construction: row-major data plus a shape
///
/// The construction gate only accepts rank-2 grids (one row per monomial,
/// one column per indeterminate). Other ranks are representable so that the
/// gate can reject them with a precise error.
///
/// # Example
///
/// ```
/// use numpoly::poly::ExponentGrid;
///
/// let grid = ExponentGrid::from_rows(&[[0, 0], [1, 0], [0, 2]]).unwrap();
/// assert_eq!(grid.shape(), &[3, 2]);
/// assert_eq!(grid.row(2), Some(&[0, 2][..]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExponentGrid {
    data: Vec<u32>,
    shape: Shape,
}

impl ExponentGrid {
    /// Create a grid from row-major data and an explicit shape
    pub fn new(data: Vec<u32>, shape: &[usize]) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(ConstructionError::GridSizeMismatch {
                shape: shape.to_vec(),
                expected,
                got: data.len(),
            }
            .into());
        }
        Ok(Self {
            data,
            shape: Shape::from(shape),
        })
    }

    /// Create a rank-2 grid from equally long rows
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * width);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Self::new(data, &[rows.len(), width])
    }

    /// Create a rank-1 grid of powers of a single indeterminate
    ///
    /// The result is rejected by [`build`](super::build); use
    /// [`PolyArray::univariate`](super::PolyArray::univariate), which expands
    /// it to one column.
    pub fn univariate(powers: &[u32]) -> Self {
        Self {
            data: powers.to_vec(),
            shape: Shape::from([powers.len()]),
        }
    }

    /// Expand a rank-1 grid to a single-column rank-2 grid
    pub(crate) fn expand_univariate(self) -> Self {
        if self.shape.ndim() != 1 {
            return self;
        }
        let rows = self.data.len();
        Self {
            data: self.data,
            shape: Shape::from([rows, 1]),
        }
    }

    /// Shape of the grid
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Rank of the grid
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Row-major grid data
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Row `i` of a rank-2 grid
    pub fn row(&self, i: usize) -> Option<&[u32]> {
        if self.ndim() != 2 || i >= self.shape[0] {
            return None;
        }
        let width = self.shape[1];
        self.data.get(i * width..(i + 1) * width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use smallvec::smallvec;

    #[test]
    fn test_grid_size_checked() {
        let err = ExponentGrid::new(vec![1, 2, 3], &[2, 2]).unwrap_err();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError::GridSizeMismatch { expected: 4, got: 3, .. })
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows: Vec<Vec<u32>> = vec![vec![1, 0], vec![2]];
        assert!(ExponentGrid::from_rows(&rows).is_err());
    }

    #[test]
    fn test_univariate_expansion() {
        let grid = ExponentGrid::univariate(&[0, 1, 3]).expand_univariate();
        assert_eq!(grid.shape(), &[3, 1]);
        assert_eq!(grid.row(2), Some(&[3][..]));
    }

    #[test]
    fn test_basis_lookup() {
        let basis = MonomialBasis::new_unchecked(vec![smallvec![1, 0], smallvec![0, 0]], 2);
        assert_eq!(basis.position(&[0, 0]), Some(1));
        assert_eq!(basis.constant_index(), Some(1));
        assert_eq!(basis.grades(), vec![1, 0]);
    }
}
