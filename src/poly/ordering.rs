//! Monomial orderings and the sortable proxy
//!
//! Polynomials have no natural order. Comparisons between polynomial
//! elements are defined by ranking the monomials of a basis and comparing
//! coefficients from the highest ranked monomial down: the first monomial at
//! which two elements differ decides, and the element with the smaller
//! coefficient there is the smaller one.
//!
//! The default ordering is [`MonomialOrdering::GradedReverse`] ("GR"):
//! ascending total degree, ties broken by comparing exponents from the last
//! indeterminate to the first, larger exponent ranking higher. With names
//! `[x, y]` this puts `y` above `x` and `x*y` above `x^2`.

use super::array::PolyArray;
use crate::error::{Error, Result};
use crate::tensor::Tensor;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Total order over exponent vectors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MonomialOrdering {
    /// "L": the first indeterminate is most significant
    Lexicographic,
    /// "R": the last indeterminate is most significant
    ReverseLexicographic,
    /// "G": total degree, then lexicographic
    Graded,
    /// "GR": total degree, then reverse lexicographic
    #[default]
    GradedReverse,
}

impl MonomialOrdering {
    /// Short name of the ordering
    pub fn as_str(&self) -> &'static str {
        match self {
            MonomialOrdering::Lexicographic => "L",
            MonomialOrdering::ReverseLexicographic => "R",
            MonomialOrdering::Graded => "G",
            MonomialOrdering::GradedReverse => "GR",
        }
    }

    /// Whether total degree is compared first
    #[inline]
    pub fn is_graded(&self) -> bool {
        matches!(
            self,
            MonomialOrdering::Graded | MonomialOrdering::GradedReverse
        )
    }

    /// Compare two exponent vectors of equal length
    ///
    /// ```
    /// use numpoly::poly::MonomialOrdering;
    /// use std::cmp::Ordering;
    ///
    /// let gr = MonomialOrdering::GradedReverse;
    /// assert_eq!(gr.compare(&[1, 0], &[2, 0]), Ordering::Less);
    /// assert_eq!(gr.compare(&[1, 1], &[2, 0]), Ordering::Greater);
    /// assert_eq!(gr.compare(&[0, 1], &[1, 0]), Ordering::Greater);
    /// ```
    pub fn compare(&self, a: &[u32], b: &[u32]) -> Ordering {
        let grade = if self.is_graded() {
            let ga: u64 = a.iter().map(|&e| u64::from(e)).sum();
            let gb: u64 = b.iter().map(|&e| u64::from(e)).sum();
            ga.cmp(&gb)
        } else {
            Ordering::Equal
        };
        grade.then_with(|| match self {
            MonomialOrdering::Lexicographic | MonomialOrdering::Graded => a.cmp(b),
            MonomialOrdering::ReverseLexicographic | MonomialOrdering::GradedReverse => {
                a.iter().rev().cmp(b.iter().rev())
            }
        })
    }
}

impl fmt::Display for MonomialOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonomialOrdering {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(MonomialOrdering::Lexicographic),
            "R" => Ok(MonomialOrdering::ReverseLexicographic),
            "G" => Ok(MonomialOrdering::Graded),
            "GR" | "RG" => Ok(MonomialOrdering::GradedReverse),
            _ => Err(Error::invalid_argument(
                "ordering",
                format!("unknown monomial ordering '{s}', expected one of L, R, G, GR"),
            )),
        }
    }
}

/// Indices of `exponents` sorted from lowest to highest rank
pub fn argsort_monomials<E: AsRef<[u32]>>(exponents: &[E], ordering: MonomialOrdering) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..exponents.len()).collect();
    indices.sort_by(|&i, &j| ordering.compare(exponents[i].as_ref(), exponents[j].as_ref()));
    indices
}

/// Rank of every exponent vector under `ordering` (0 = lowest)
///
/// Exponent vectors are expected to be distinct, as in a monomial basis.
///
/// ```
/// use numpoly::poly::{order, MonomialOrdering};
///
/// let ranks = order(&[[2, 0], [1, 0], [1, 1]], MonomialOrdering::GradedReverse);
/// assert_eq!(ranks, vec![1, 0, 2]);
/// ```
pub fn order<E: AsRef<[u32]>>(exponents: &[E], ordering: MonomialOrdering) -> Vec<usize> {
    let mut ranks = vec![0; exponents.len()];
    for (rank, index) in argsort_monomials(exponents, ordering).into_iter().enumerate() {
        ranks[index] = rank;
    }
    ranks
}

/// Compare two coefficient keys ordered from the most significant monomial
///
/// Equal values (including `0.0` against `-0.0`) continue the scan.
pub(crate) fn compare_keys(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.total_cmp(y) {
            _ if x == y => continue,
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Dense rank of every polynomial element, monotone with element comparison
///
/// Element keys are their coefficients ordered from the highest ranked
/// monomial to the lowest. All elements are sorted together and equal
/// elements share a rank, so argmin/argmax over the proxy keep first
/// occurrence semantics. Zero elements rank between elements with a negative
/// leading coefficient and those with a positive one.
pub(crate) fn sortable_proxy_impl(poly: &PolyArray, ordering: MonomialOrdering) -> Result<Tensor<i64>> {
    let descending: Vec<usize> = argsort_monomials(poly.exponents(), ordering)
        .into_iter()
        .rev()
        .collect();
    let size = poly.size();
    let data = poly.coefficients().to_vec();

    let keys: Vec<Vec<f64>> = (0..size)
        .map(|j| descending.iter().map(|&k| data[k * size + j]).collect())
        .collect();

    let mut elements: Vec<usize> = (0..size).collect();
    elements.sort_by(|&i, &j| compare_keys(&keys[i], &keys[j]));

    let mut proxy = vec![0i64; size];
    let mut rank = 0i64;
    for (pos, &element) in elements.iter().enumerate() {
        if pos > 0 && compare_keys(&keys[elements[pos - 1]], &keys[element]) != Ordering::Equal {
            rank += 1;
        }
        proxy[element] = rank;
    }

    Tensor::from_vec(proxy, poly.shape())
}
