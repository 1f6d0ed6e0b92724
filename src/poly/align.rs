//! Alignment of polynomial arrays to common names, bases and shapes
//!
//! Element-wise operations between polynomial arrays first bring both sides
//! to the same indeterminates, the same monomial basis and the same shape.
//! Alignment never prunes: it builds with
//! [`ConstructionOptions::retaining`].

use super::array::PolyArray;
use super::basis::Exponents;
use super::construct::{ConstructionOptions, assemble};
use super::helpers::natural_cmp;
use super::ordering::MonomialOrdering;
use crate::error::{Error, Result};
use crate::tensor::{Shape, Tensor, broadcast_shapes};
use std::sync::Arc;

/// Rewrite `poly` over the exact name list `names`
///
/// Names of `poly` that are missing from `names` must be unused.
pub(crate) fn align_to_names(poly: &PolyArray, names: &Arc<[String]>) -> Result<PolyArray> {
    let options = ConstructionOptions::retaining();
    if poly.names() == &names[..] {
        return assemble(
            poly.exponents().to_vec(),
            poly.coefficients().clone(),
            Arc::clone(names),
            names.len(),
            &options,
        );
    }

    if poly.is_constant() {
        return assemble(
            vec![Exponents::from_elem(0, names.len())],
            poly.to_tensor()?.unsqueeze(0)?,
            Arc::clone(names),
            names.len(),
            &options,
        );
    }

    let mut targets = Vec::with_capacity(poly.num_indeterminates());
    for (j, name) in poly.names().iter().enumerate() {
        let target = names.iter().position(|n| n == name);
        if target.is_none() && poly.exponents().iter().any(|t| t[j] != 0) {
            return Err(Error::invalid_argument(
                "names",
                format!("indeterminate '{name}' is missing from the target names"),
            ));
        }
        targets.push(target);
    }

    let terms: Vec<Exponents> = poly
        .exponents()
        .iter()
        .map(|term| {
            let mut aligned = Exponents::from_elem(0, names.len());
            for (&e, target) in term.iter().zip(&targets) {
                if let Some(t) = *target {
                    aligned[t] = e;
                }
            }
            aligned
        })
        .collect();

    assemble(
        terms,
        poly.coefficients().clone(),
        Arc::clone(names),
        names.len(),
        &options,
    )
}

/// Union of the names of the non-constant arrays, naturally sorted
///
/// Falls back to the names of every array when all are constant.
pub(crate) fn common_names(polys: &[&PolyArray]) -> Arc<[String]> {
    let mut names: Vec<String> = Vec::new();
    let symbolic: Vec<&&PolyArray> = polys.iter().filter(|p| !p.is_constant()).collect();
    let sources: Vec<&PolyArray> = if symbolic.is_empty() {
        polys.to_vec()
    } else {
        symbolic.into_iter().copied().collect()
    };
    for poly in sources {
        for name in poly.names() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names.sort_by(|a, b| natural_cmp(a, b));
    Arc::from(names)
}

/// Bring every array to a common, naturally sorted set of indeterminates
///
/// Names of constant arrays do not contribute. All results share one name
/// list.
pub fn align_indeterminants(polys: &[&PolyArray]) -> Result<Vec<PolyArray>> {
    let names = common_names(polys);
    polys.iter().map(|p| align_to_names(p, &names)).collect()
}

/// Bring arrays over the same names to a common monomial basis
///
/// The common basis is the union of all bases in ascending graded reverse
/// lexicographic order; missing terms get zero planes.
pub fn align_exponents(polys: &[&PolyArray]) -> Result<Vec<PolyArray>> {
    let Some(first) = polys.first() else {
        return Ok(Vec::new());
    };
    if polys.iter().any(|p| p.names() != first.names()) {
        return Err(Error::invalid_argument(
            "polys",
            "exponents can only be aligned over identical indeterminates",
        ));
    }

    let mut union: Vec<Exponents> = Vec::new();
    for poly in polys {
        for term in poly.exponents() {
            if !union.contains(term) {
                union.push(term.clone());
            }
        }
    }
    let ordering = MonomialOrdering::GradedReverse;
    union.sort_by(|a, b| ordering.compare(a, b));

    let options = ConstructionOptions::retaining();
    polys
        .iter()
        .map(|poly| {
            if poly.exponents() == union.as_slice() {
                return Ok((*poly).clone());
            }
            let zeros = Tensor::<f64>::zeros(poly.shape());
            let planes = union
                .iter()
                .map(|term| match poly.basis().position(term) {
                    Some(k) => poly.coefficient_plane(k),
                    None => Ok(zeros.clone()),
                })
                .collect::<Result<Vec<_>>>()?;
            assemble(
                union.clone(),
                Tensor::stack(&planes)?,
                Arc::clone(poly.shared_names()),
                poly.num_indeterminates(),
                &options,
            )
        })
        .collect()
}

/// Broadcast every array to the common shape
pub fn align_shape(polys: &[&PolyArray]) -> Result<Vec<PolyArray>> {
    let mut shape = Shape::new();
    for poly in polys {
        shape = broadcast_shapes(&shape, poly.shape())
            .ok_or_else(|| Error::broadcast(&shape, poly.shape()))?;
    }
    polys
        .iter()
        .map(|p| {
            if p.shape() == shape.as_slice() {
                Ok((*p).clone())
            } else {
                p.broadcast_to(&shape)
            }
        })
        .collect()
}

/// Align names, shapes and bases in one step
///
/// ```
/// use numpoly::poly::{align_polynomials, PolyArray};
///
/// let x = PolyArray::symbol("x").unwrap();
/// let y = PolyArray::symbol("y").unwrap();
/// let aligned = align_polynomials(&[&x, &y]).unwrap();
/// assert_eq!(aligned[0].names(), aligned[1].names());
/// assert_eq!(aligned[0].exponents(), aligned[1].exponents());
/// ```
pub fn align_polynomials(polys: &[&PolyArray]) -> Result<Vec<PolyArray>> {
    let named = align_indeterminants(polys)?;
    let refs: Vec<&PolyArray> = named.iter().collect();
    let shaped = align_shape(&refs)?;
    let refs: Vec<&PolyArray> = shaped.iter().collect();
    align_exponents(&refs)
}
