//! Polynomial array arithmetic
//!
//! Operands are aligned first (see [`align`](super::align)); the coefficient
//! work is issued against the tensor operation traits and every result goes
//! back through the construction gate, which prunes vanished terms.

use super::align::{align_indeterminants, align_polynomials, align_shape};
use super::array::PolyArray;
use super::basis::Exponents;
use super::construct::{ConstructionOptions, assemble};
use super::ordering::{MonomialOrdering, argsort_monomials};
use crate::error::{Error, Result};
use crate::ops::TensorOps;
use crate::tensor::{Shape, Tensor, broadcast_shapes};
use std::sync::Arc;

pub(crate) fn pair(mut aligned: Vec<PolyArray>) -> Result<(PolyArray, PolyArray)> {
    match (aligned.pop(), aligned.pop()) {
        (Some(b), Some(a)) => Ok((a, b)),
        _ => Err(Error::Internal("alignment lost an operand".to_string())),
    }
}

pub(crate) fn add_impl<C: TensorOps>(client: &C, a: &PolyArray, b: &PolyArray) -> Result<PolyArray> {
    let (a, b) = pair(align_polynomials(&[a, b])?)?;
    let coefficients = client.add(a.coefficients(), b.coefficients())?;
    a.with_coefficients(coefficients)
}

pub(crate) fn sub_impl<C: TensorOps>(client: &C, a: &PolyArray, b: &PolyArray) -> Result<PolyArray> {
    let (a, b) = pair(align_polynomials(&[a, b])?)?;
    let coefficients = client.sub(a.coefficients(), b.coefficients())?;
    a.with_coefficients(coefficients)
}

pub(crate) fn neg_impl<C: TensorOps>(client: &C, a: &PolyArray) -> Result<PolyArray> {
    a.with_coefficients(client.neg(a.coefficients())?)
}

pub(crate) fn scale_impl<C: TensorOps>(client: &C, a: &PolyArray, factor: f64) -> Result<PolyArray> {
    a.with_coefficients(client.mul_scalar(a.coefficients(), factor)?)
}

/// Product of two polynomial arrays
///
/// Every pair of terms contributes the product of their planes to the sum
/// of their exponents. The result basis is in ascending GR order.
pub(crate) fn mul_impl<C: TensorOps>(client: &C, a: &PolyArray, b: &PolyArray) -> Result<PolyArray> {
    let named = align_indeterminants(&[a, b])?;
    let (a, b) = pair(align_shape(&[&named[0], &named[1]])?)?;

    let mut terms: Vec<Exponents> = Vec::with_capacity(a.num_terms() * b.num_terms());
    let mut planes: Vec<Tensor<f64>> = Vec::with_capacity(terms.capacity());
    for (i, ea) in a.exponents().iter().enumerate() {
        let pa = a.coefficient_plane(i)?;
        for (j, eb) in b.exponents().iter().enumerate() {
            let product = client.mul(&pa, &b.coefficient_plane(j)?)?;
            let exponent: Exponents = ea.iter().zip(eb).map(|(x, y)| x + y).collect();
            match terms.iter().position(|t| *t == exponent) {
                Some(k) => planes[k] = client.add(&planes[k], &product)?,
                None => {
                    terms.push(exponent);
                    planes.push(product);
                }
            }
        }
    }

    let sorted = argsort_monomials(&terms, MonomialOrdering::GradedReverse);
    let terms: Vec<Exponents> = sorted.iter().map(|&k| terms[k].clone()).collect();
    let planes: Vec<Tensor<f64>> = sorted.iter().map(|&k| planes[k].clone()).collect();

    assemble(
        terms,
        Tensor::stack(&planes)?,
        Arc::clone(a.shared_names()),
        a.num_indeterminates(),
        &ConstructionOptions::default(),
    )
}

/// Integer power by repeated squaring; `a^0` is the constant one
pub(crate) fn pow_impl<C: TensorOps>(client: &C, a: &PolyArray, exponent: u32) -> Result<PolyArray> {
    let mut result = PolyArray::constant(&Tensor::ones(a.shape()))?;
    let mut base = a.clone();
    let mut e = exponent;
    while e > 0 {
        if e & 1 == 1 {
            result = mul_impl(client, &result, &base)?;
        }
        e >>= 1;
        if e > 0 {
            base = mul_impl(client, &base, &base)?;
        }
    }
    Ok(result)
}

/// Outer product of a numeric plane with a polynomial array
///
/// The result has shape `plane.shape() ++ poly.shape()`.
pub(crate) fn outer_impl<C: TensorOps>(
    client: &C,
    plane: &Tensor<f64>,
    poly: &PolyArray,
) -> Result<PolyArray> {
    let s = plane.shape();
    let t = poly.shape();

    let lhs_shape: Shape = std::iter::once(1)
        .chain(s.iter().copied())
        .chain(std::iter::repeat(1).take(t.len()))
        .collect();
    let rhs_shape: Shape = std::iter::once(poly.num_terms())
        .chain(std::iter::repeat(1).take(s.len()))
        .chain(t.iter().copied())
        .collect();

    let lhs = plane.reshape(&lhs_shape)?;
    let rhs = poly.coefficients().reshape(&rhs_shape)?;
    poly.with_coefficients(client.mul(&lhs, &rhs)?)
}

/// Element-wise selection between two polynomial arrays
pub(crate) fn where_impl<C: TensorOps>(
    client: &C,
    condition: &Tensor<bool>,
    a: &PolyArray,
    b: &PolyArray,
) -> Result<PolyArray> {
    let shape = broadcast_shapes(a.shape(), b.shape())
        .and_then(|s| broadcast_shapes(condition.shape(), &s))
        .ok_or_else(|| Error::broadcast(condition.shape(), a.shape()))?;
    let a = a.broadcast_to(&shape)?;
    let b = b.broadcast_to(&shape)?;
    let (a, b) = pair(align_polynomials(&[&a, &b])?)?;

    let condition = condition.broadcast_to(&shape)?;
    let coefficients = client.where_cond(&condition, a.coefficients(), b.coefficients())?;
    a.with_coefficients(coefficients)
}

/// Element-wise mathematical equality
pub(crate) fn equal_impl<C: TensorOps>(client: &C, a: &PolyArray, b: &PolyArray) -> Result<Tensor<bool>> {
    let (a, b) = pair(align_polynomials(&[a, b])?)?;
    let differs = client.ne(a.coefficients(), b.coefficients())?;
    let any = client.any(&differs, &[0], false)?;
    client.logical_not(&any)
}

/// Stack equally shaped polynomial arrays along a new leading axis
///
/// ```
/// use numpoly::poly::{stack, PolyArray};
///
/// let x = PolyArray::symbol("x").unwrap();
/// let y = PolyArray::symbol("y").unwrap();
/// let xy = stack(&[&x, &y]).unwrap();
/// assert_eq!(xy, PolyArray::symbols(&["x", "y"]).unwrap());
/// ```
pub fn stack(polys: &[&PolyArray]) -> Result<PolyArray> {
    let aligned = align_polynomials(polys)?;
    let first = aligned
        .first()
        .ok_or_else(|| Error::invalid_argument("polys", "cannot stack an empty list"))?;
    if polys.iter().any(|p| p.shape() != polys[0].shape()) {
        return Err(Error::shape_mismatch(polys[0].shape(), first.shape()));
    }

    let per_term = (0..first.num_terms())
        .map(|k| {
            let planes = aligned
                .iter()
                .map(|p| p.coefficient_plane(k))
                .collect::<Result<Vec<_>>>()?;
            Tensor::stack(&planes)
        })
        .collect::<Result<Vec<_>>>()?;

    first.with_coefficients(Tensor::stack(&per_term)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::CpuClient;

    fn xy() -> (PolyArray, PolyArray) {
        (
            PolyArray::symbol("x").unwrap(),
            PolyArray::symbol("y").unwrap(),
        )
    }

    #[test]
    fn test_add_cancels_terms() {
        let client = CpuClient::new();
        let (x, y) = xy();
        let sum = add_impl(&client, &x, &y).unwrap();
        let back = sub_impl(&client, &sum, &y).unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn test_mul_collects_terms() {
        let client = CpuClient::new();
        let (x, y) = xy();
        // (x + y)^2 = x^2 + 2xy + y^2
        let s = add_impl(&client, &x, &y).unwrap();
        let sq = mul_impl(&client, &s, &s).unwrap();
        let got: Vec<Vec<u32>> = sq.exponents().iter().map(|e| e.to_vec()).collect();
        assert_eq!(got, vec![vec![2, 0], vec![1, 1], vec![0, 2]]);
        assert_eq!(sq.coefficients().to_vec(), vec![1.0, 2.0, 1.0]);
        assert_eq!(pow_impl(&client, &s, 2).unwrap(), sq);
    }

    #[test]
    fn test_pow_zero_is_one() {
        let client = CpuClient::new();
        let (x, _) = xy();
        let one = pow_impl(&client, &x, 0).unwrap();
        assert!(one.is_constant());
        assert_eq!(one.to_tensor().unwrap().item().unwrap(), 1.0);
    }

    #[test]
    fn test_outer_shape() {
        let client = CpuClient::new();
        let q = PolyArray::variable(3).unwrap();
        let plane = Tensor::<f64>::from_slice(&[1.0, 2.0], &[2]);
        let out = outer_impl(&client, &plane, &q).unwrap();
        assert_eq!(out.shape(), &[2, 3]);
    }

    #[test]
    fn test_where_and_equal() {
        let client = CpuClient::new();
        let (x, y) = xy();
        let cond = Tensor::<bool>::from_slice(&[true, false], &[2]);
        let picked = where_impl(&client, &cond, &x, &y).unwrap();
        assert_eq!(picked, PolyArray::symbols(&["x", "y"]).unwrap());
        let eq = equal_impl(&client, &picked, &x).unwrap();
        assert_eq!(eq.to_vec(), vec![true, false]);
    }
}
