//! Extreme elements and their indices: amin, amax, argmin, argmax

use crate::error::Result;
use crate::ops::TensorOps;
use crate::poly::helpers::normalize_axis;
use crate::poly::ordering::sortable_proxy_impl;
use crate::poly::{MonomialOrdering, PolyArray};
use crate::tensor::{Shape, Tensor};

/// Which end of the ordering to select
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Extreme {
    Min,
    Max,
}

fn pick<C: TensorOps>(
    client: &C,
    proxy: &Tensor<i64>,
    axis: Option<isize>,
    keepdim: bool,
    extreme: Extreme,
) -> Result<Tensor<i64>> {
    match extreme {
        Extreme::Min => client.argmin(proxy, axis, keepdim),
        Extreme::Max => client.argmax(proxy, axis, keepdim),
    }
}

/// Index of the smallest or largest element, first occurrence on ties
pub(crate) fn arg_extreme_impl<C: TensorOps>(
    client: &C,
    a: &PolyArray,
    axis: Option<isize>,
    extreme: Extreme,
) -> Result<Tensor<i64>> {
    let proxy = sortable_proxy_impl(a, MonomialOrdering::GradedReverse)?;
    pick(client, &proxy, axis, false, extreme)
}

/// Smallest or largest element, over the flattened array or along `axis`
pub(crate) fn extreme_impl<C: TensorOps>(
    client: &C,
    a: &PolyArray,
    axis: Option<isize>,
    extreme: Extreme,
) -> Result<PolyArray> {
    let proxy = sortable_proxy_impl(a, MonomialOrdering::GradedReverse)?;

    let Some(axis) = axis else {
        let index = pick(client, &proxy, None, false, extreme)?.item()?;
        return a.flatten()?.select(0, index as usize);
    };

    let d = normalize_axis(axis, a.ndim())?;
    let index = pick(client, &proxy, Some(d as isize), true, extreme)?;
    let full = Shape::from([a.num_terms()]).concat(index.shape());
    let index = index.unsqueeze(0)?.broadcast_to(&full)?;
    let gathered = client.gather(a.coefficients(), d as isize + 1, &index)?;
    a.with_coefficients(gathered.squeeze(d as isize + 1)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::CpuClient;

    #[test]
    fn test_amin_along_axis() {
        // [[3x^2, x^2], [2x^2, 4x^2]]
        let client = CpuClient::new();
        let terms = vec![(
            vec![2u32],
            Tensor::<f64>::from_slice(&[3.0, 1.0, 2.0, 4.0], &[2, 2]),
        )];
        let p = PolyArray::from_terms(&terms, Some(&["x"])).unwrap();
        let rows = extreme_impl(&client, &p, Some(1), Extreme::Min).unwrap();
        assert_eq!(rows.shape(), &[2]);
        assert_eq!(rows.coefficients().to_vec(), vec![1.0, 2.0]);

        let cols = arg_extreme_impl(&client, &p, Some(0), Extreme::Max).unwrap();
        assert_eq!(cols.to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_amax_flattened() {
        let client = CpuClient::new();
        let q = PolyArray::variable(3).unwrap();
        let top = extreme_impl(&client, &q, None, Extreme::Max).unwrap();
        assert_eq!(top, PolyArray::symbol("q2").unwrap());
    }
}
