//! Element-wise minimum and maximum of two polynomial arrays

use super::extrema::Extreme;
use crate::error::Result;
use crate::ops::TensorOps;
use crate::poly::arith::{pair, where_impl};
use crate::poly::{MonomialOrdering, PolyArray, align_polynomials, argsort_monomials};
use crate::tensor::Tensor;

/// Pick the smaller (or larger) element of each aligned pair
///
/// Terms are visited from the lowest ranked monomial to the highest; a term
/// where the coefficients differ overrides the decision of every lower term,
/// so the highest differing monomial decides. Equal elements take `b`.
pub(crate) fn pairwise_extreme_impl<C: TensorOps>(
    client: &C,
    a: &PolyArray,
    b: &PolyArray,
    extreme: Extreme,
) -> Result<PolyArray> {
    let (a, b) = pair(align_polynomials(&[a, b])?)?;
    let zero = Tensor::<f64>::scalar(0.0);
    let mut take_a = Tensor::<bool>::zeros(a.shape());

    for k in argsort_monomials(a.exponents(), MonomialOrdering::GradedReverse) {
        let c1 = a.coefficient_plane(k)?;
        let c2 = b.coefficient_plane(k)?;
        let nonzero = client.logical_or(&client.ne(&c1, &zero)?, &client.ne(&c2, &zero)?)?;
        let decides = client.logical_and(&nonzero, &client.ne(&c1, &c2)?)?;
        let wins = match extreme {
            Extreme::Min => client.lt(&c1, &c2)?,
            Extreme::Max => client.gt(&c1, &c2)?,
        };
        take_a = client.where_cond(&decides, &wins, &take_a)?;
    }

    where_impl(client, &take_a, &a, &b)
}
