//! Sorting polynomial arrays

use crate::error::Result;
use crate::ops::TensorOps;
use crate::poly::helpers::normalize_axis;
use crate::poly::ordering::sortable_proxy_impl;
use crate::poly::{MonomialOrdering, PolyArray};
use crate::tensor::Shape;

/// Sort elements along `axis` in ascending polynomial order
///
/// `axis == None` sorts the flattened array. The sort is stable.
pub(crate) fn sort_impl<C: TensorOps>(
    client: &C,
    a: &PolyArray,
    axis: Option<isize>,
) -> Result<PolyArray> {
    let (a, d) = match axis {
        None => (a.flatten()?, 0),
        Some(axis) => (a.clone(), normalize_axis(axis, a.ndim())?),
    };
    let proxy = sortable_proxy_impl(&a, MonomialOrdering::GradedReverse)?;
    let order = client.argsort(&proxy, d as isize, false)?;

    let full = Shape::from([a.num_terms()]).concat(order.shape());
    let index = order.unsqueeze(0)?.broadcast_to(&full)?;
    a.with_coefficients(client.gather(a.coefficients(), d as isize + 1, &index)?)
}
