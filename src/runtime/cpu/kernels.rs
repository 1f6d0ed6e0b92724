//! Element kernels shared by the CPU operation implementations

use super::CpuClient;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::tensor::{Shape, Tensor, broadcast_shapes};
use std::cmp::Ordering;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[inline]
pub(crate) fn is_nan<T: Element>(v: T) -> bool {
    v.partial_cmp(&v).is_none()
}

/// Total order used by sorting kernels: NaN sorts after every other value
#[inline]
pub(crate) fn total_order<T: Element>(a: T, b: T) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ord) => ord,
        None => is_nan(a).cmp(&is_nan(b)),
    }
}

/// Advance a row-major multi-index by one position
#[inline]
fn advance(pos: &mut [usize], shape: &[usize]) {
    for d in (0..shape.len()).rev() {
        pos[d] += 1;
        if pos[d] < shape[d] {
            return;
        }
        pos[d] = 0;
    }
}

fn empty_reduction(op: &'static str) -> Error {
    Error::invalid_argument("a", format!("attempt to get {op} of an empty sequence"))
}

/// Apply `f` element-wise to one tensor
pub(crate) fn unary_map<T, O, F>(client: &CpuClient, a: &Tensor<T>, f: F) -> Result<Tensor<O>>
where
    T: Element,
    O: Element,
    F: Fn(T) -> O + Send + Sync,
{
    let shape = Shape::from(a.shape());
    let data: Vec<O> = match a.contiguous_slice() {
        Some(slice) => map_slice(client, slice, &f),
        None => a.iter().map(f).collect(),
    };
    Tensor::from_vec(data, &shape)
}

fn map_slice<T, O, F>(client: &CpuClient, slice: &[T], f: &F) -> Vec<O>
where
    T: Element,
    O: Element,
    F: Fn(T) -> O + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        let min_len = client.rayon_min_len();
        if slice.len() >= min_len {
            return slice
                .par_iter()
                .with_min_len(min_len)
                .map(|&x| f(x))
                .collect();
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    slice.iter().map(|&x| f(x)).collect()
}

/// Apply `f` element-wise to two broadcast-compatible tensors
pub(crate) fn binary_map<A, B, O, F>(
    client: &CpuClient,
    a: &Tensor<A>,
    b: &Tensor<B>,
    f: F,
) -> Result<Tensor<O>>
where
    A: Element,
    B: Element,
    O: Element,
    F: Fn(A, B) -> O + Send + Sync,
{
    let (a, b) = a.broadcast_with(b)?;
    let shape = Shape::from(a.shape());

    let data: Vec<O> = match (a.contiguous_slice(), b.contiguous_slice()) {
        (Some(sa), Some(sb)) => zip_slices(client, sa, sb, &f),
        _ => a.iter().zip(b.iter()).map(|(x, y)| f(x, y)).collect(),
    };
    Tensor::from_vec(data, &shape)
}

fn zip_slices<A, B, O, F>(client: &CpuClient, sa: &[A], sb: &[B], f: &F) -> Vec<O>
where
    A: Element,
    B: Element,
    O: Element,
    F: Fn(A, B) -> O + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        let min_len = client.rayon_min_len();
        if sa.len() >= min_len {
            return sa
                .par_iter()
                .zip(sb.par_iter())
                .with_min_len(min_len)
                .map(|(&x, &y)| f(x, y))
                .collect();
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    sa.iter().zip(sb).map(|(&x, &y)| f(x, y)).collect()
}

/// Masked selection with three-way broadcasting
pub(crate) fn select<T: Element>(
    cond: &Tensor<bool>,
    x: &Tensor<T>,
    y: &Tensor<T>,
) -> Result<Tensor<T>> {
    let xy = broadcast_shapes(x.shape(), y.shape())
        .ok_or_else(|| Error::broadcast(x.shape(), y.shape()))?;
    let shape =
        broadcast_shapes(cond.shape(), &xy).ok_or_else(|| Error::broadcast(cond.shape(), &xy))?;

    let cond = cond.broadcast_to(&shape)?;
    let x = x.broadcast_to(&shape)?;
    let y = y.broadcast_to(&shape)?;

    let data: Vec<T> = cond
        .iter()
        .zip(x.iter().zip(y.iter()))
        .map(|(c, (xv, yv))| if c { xv } else { yv })
        .collect();
    Tensor::from_vec(data, &shape)
}

/// Fold every element into the output slot of its non-reduced coordinates
pub(crate) fn reduce_dims<T, O, F>(
    a: &Tensor<T>,
    dims: &[usize],
    keepdim: bool,
    init: O,
    f: F,
) -> Result<Tensor<O>>
where
    T: Element,
    O: Element,
    F: Fn(O, T) -> O,
{
    let ndim = a.ndim();
    let shape = a.shape();
    let mut reduced = vec![false; ndim];
    for &d in dims {
        if d >= ndim {
            return Err(Error::InvalidDimension {
                dim: d as isize,
                ndim,
            });
        }
        reduced[d] = true;
    }

    let kept: Shape = shape
        .iter()
        .zip(&reduced)
        .map(|(&s, &r)| if r { 1 } else { s })
        .collect();

    // Output strides over the kept shape; reduced dimensions contribute nothing
    let mut out_strides = vec![0usize; ndim];
    let mut stride = 1usize;
    for d in (0..ndim).rev() {
        if !reduced[d] {
            out_strides[d] = stride;
            stride *= kept[d];
        }
    }

    let mut acc = vec![init; kept.numel()];
    let mut index = vec![0usize; ndim];
    let mut out_pos = 0usize;
    for value in a.iter() {
        acc[out_pos] = f(acc[out_pos], value);
        for d in (0..ndim).rev() {
            index[d] += 1;
            out_pos += out_strides[d];
            if index[d] < shape[d] {
                break;
            }
            out_pos -= out_strides[d] * shape[d];
            index[d] = 0;
        }
    }

    let out_shape: Shape = if keepdim {
        kept
    } else {
        shape
            .iter()
            .zip(&reduced)
            .filter(|(_, r)| !**r)
            .map(|(&s, _)| s)
            .collect()
    };
    Tensor::from_vec(acc, &out_shape)
}

/// Index of the preferred element along `dim` (or the flattened tensor)
///
/// `prefer(candidate, best)` must be strict so ties keep the first occurrence.
pub(crate) fn arg_reduce<T, F>(
    a: &Tensor<T>,
    dim: Option<isize>,
    keepdim: bool,
    op: &'static str,
    prefer: F,
) -> Result<Tensor<i64>>
where
    T: Element,
    F: Fn(T, T) -> bool,
{
    let Some(dim) = dim else {
        let mut best: Option<(usize, T)> = None;
        for (i, v) in a.iter().enumerate() {
            match best {
                Some((_, b)) if !prefer(v, b) => {}
                _ => best = Some((i, v)),
            }
        }
        let (idx, _) = best.ok_or_else(|| empty_reduction(op))?;
        let shape = if keepdim { vec![1; a.ndim()] } else { Vec::new() };
        return Tensor::from_vec(vec![idx as i64], &shape);
    };

    let d = a.normalize_dim(dim)?;
    let shape = a.shape();
    let n = shape[d];
    if n == 0 {
        return Err(empty_reduction(op));
    }
    let outer: usize = shape[..d].iter().product();
    let inner: usize = shape[d + 1..].iter().product();
    let data = a.to_vec();

    let mut out = Vec::with_capacity(outer * inner);
    for o in 0..outer {
        for i in 0..inner {
            let base = o * n * inner + i;
            let mut best = data[base];
            let mut best_k = 0usize;
            for k in 1..n {
                let v = data[base + k * inner];
                if prefer(v, best) {
                    best = v;
                    best_k = k;
                }
            }
            out.push(best_k as i64);
        }
    }

    let mut out_shape = Shape::from(shape);
    if keepdim {
        out_shape[d] = 1;
    } else {
        out_shape.remove(d);
    }
    Tensor::from_vec(out, &out_shape)
}

/// Gather along `dim` (see [`IndexingOps::gather`](crate::ops::IndexingOps::gather))
pub(crate) fn gather<T: Element>(a: &Tensor<T>, dim: isize, index: &Tensor<i64>) -> Result<Tensor<T>> {
    let d = a.normalize_dim(dim)?;
    if index.ndim() != a.ndim() {
        return Err(Error::shape_mismatch(a.shape(), index.shape()));
    }
    for (k, (&is, &as_)) in index.shape().iter().zip(a.shape()).enumerate() {
        if k != d && is > as_ {
            return Err(Error::shape_mismatch(a.shape(), index.shape()));
        }
    }

    let size = a.shape()[d];
    let mut pos = vec![0usize; a.ndim()];
    let mut out = Vec::with_capacity(index.numel());
    for idx in index.iter() {
        if idx < 0 || idx as usize >= size {
            return Err(Error::IndexOutOfBounds { index: idx, size });
        }
        let saved = pos[d];
        pos[d] = idx as usize;
        let value = a
            .get(&pos)
            .ok_or_else(|| Error::Internal(format!("gather position {pos:?} out of range")))?;
        out.push(value);
        pos[d] = saved;
        advance(&mut pos, index.shape());
    }

    Tensor::from_vec(out, index.shape())
}

/// Stable argsort of every lane along `dim`
pub(crate) fn argsort<T: Element>(a: &Tensor<T>, dim: isize, descending: bool) -> Result<Tensor<i64>> {
    let d = a.normalize_dim(dim)?;
    let shape = a.shape();
    let n = shape[d];
    let outer: usize = shape[..d].iter().product();
    let inner: usize = shape[d + 1..].iter().product();
    let data = a.to_vec();

    let mut out = vec![0i64; data.len()];
    let mut order: Vec<usize> = Vec::with_capacity(n);
    for o in 0..outer {
        for i in 0..inner {
            let base = o * n * inner + i;
            order.clear();
            order.extend(0..n);
            if descending {
                order.sort_by(|&x, &y| total_order(data[base + y * inner], data[base + x * inner]));
            } else {
                order.sort_by(|&x, &y| total_order(data[base + x * inner], data[base + y * inner]));
            }
            for (k, &src) in order.iter().enumerate() {
                out[base + k * inner] = src as i64;
            }
        }
    }

    Tensor::from_vec(out, shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_dims_middle_axis() {
        let a = Tensor::<f64>::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[1, 2, 3]);
        let out = reduce_dims(&a, &[1], false, 0.0, |acc, v| acc + v).unwrap();
        assert_eq!(out.shape(), &[1, 3]);
        assert_eq!(out.to_vec(), vec![5.0, 7.0, 9.0]);

        let kept = reduce_dims(&a, &[1], true, 0.0, |acc, v| acc + v).unwrap();
        assert_eq!(kept.shape(), &[1, 1, 3]);
    }

    #[test]
    fn test_arg_reduce_first_occurrence() {
        let a = Tensor::<f64>::from_slice(&[1.0, 5.0, 5.0, 0.0], &[4]);
        let idx = arg_reduce(&a, None, false, "argmax", |v, b| v > b).unwrap();
        assert_eq!(idx.item().unwrap(), 1);
        assert!(arg_reduce(&Tensor::<f64>::zeros(&[0]), None, false, "argmax", |v, b| v > b).is_err());
    }

    #[test]
    fn test_gather_rows() {
        let a = Tensor::<f64>::from_slice(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
        let index = Tensor::<i64>::from_slice(&[1, 0], &[1, 2]);
        let out = gather(&a, 0, &index).unwrap();
        assert_eq!(out.to_vec(), vec![3.0, 2.0]);
        let bad = Tensor::<i64>::from_slice(&[2, 0], &[1, 2]);
        assert!(matches!(gather(&a, 0, &bad), Err(Error::IndexOutOfBounds { .. })));
    }

    #[test]
    fn test_argsort_stable_descending() {
        let a = Tensor::<i64>::from_slice(&[2, 7, 2, 7], &[4]);
        assert_eq!(argsort(&a, 0, false).unwrap().to_vec(), vec![0, 2, 1, 3]);
        assert_eq!(argsort(&a, 0, true).unwrap().to_vec(), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_select_broadcasts_condition() {
        let cond = Tensor::<bool>::from_slice(&[true, false], &[2]);
        let x = Tensor::<f64>::from_slice(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
        let y = Tensor::<f64>::scalar(0.0);
        assert_eq!(select(&cond, &x, &y).unwrap().to_vec(), vec![1.0, 0.0, 3.0, 0.0]);
    }
}
