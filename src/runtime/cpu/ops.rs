//! CPU implementations of the tensor operation traits

use super::CpuClient;
use super::kernels::{arg_reduce, argsort, binary_map, gather, is_nan, reduce_dims, select, unary_map};
use crate::dtype::Element;
use crate::error::Result;
use crate::ops::{
    BinaryOps, CompareOps, ConditionalOps, IndexingOps, LogicalOps, ReduceOps, ScalarOps,
    SortingOps, UnaryOps,
};
use crate::tensor::Tensor;

/// Element-wise binary arithmetic
#[derive(Clone, Copy, Debug)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    #[inline]
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
        }
    }
}

fn binary_op_impl(
    client: &CpuClient,
    op: BinaryOp,
    a: &Tensor<f64>,
    b: &Tensor<f64>,
) -> Result<Tensor<f64>> {
    binary_map(client, a, b, move |x, y| op.apply(x, y))
}

impl BinaryOps for CpuClient {
    fn add(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<f64>> {
        binary_op_impl(self, BinaryOp::Add, a, b)
    }

    fn sub(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<f64>> {
        binary_op_impl(self, BinaryOp::Sub, a, b)
    }

    fn mul(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<f64>> {
        binary_op_impl(self, BinaryOp::Mul, a, b)
    }
}

impl UnaryOps for CpuClient {
    fn neg(&self, a: &Tensor<f64>) -> Result<Tensor<f64>> {
        unary_map(self, a, |x| -x)
    }

    fn abs(&self, a: &Tensor<f64>) -> Result<Tensor<f64>> {
        unary_map(self, a, f64::abs)
    }
}

impl ScalarOps for CpuClient {
    fn mul_scalar(&self, a: &Tensor<f64>, scalar: f64) -> Result<Tensor<f64>> {
        unary_map(self, a, move |x| x * scalar)
    }
}

impl CompareOps for CpuClient {
    fn eq(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<bool>> {
        binary_map(self, a, b, |x, y| x == y)
    }

    fn ne(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<bool>> {
        binary_map(self, a, b, |x, y| x != y)
    }

    fn lt(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<bool>> {
        binary_map(self, a, b, |x, y| x < y)
    }

    fn gt(&self, a: &Tensor<f64>, b: &Tensor<f64>) -> Result<Tensor<bool>> {
        binary_map(self, a, b, |x, y| x > y)
    }
}

impl LogicalOps for CpuClient {
    fn logical_and(&self, a: &Tensor<bool>, b: &Tensor<bool>) -> Result<Tensor<bool>> {
        binary_map(self, a, b, |x, y| x && y)
    }

    fn logical_or(&self, a: &Tensor<bool>, b: &Tensor<bool>) -> Result<Tensor<bool>> {
        binary_map(self, a, b, |x, y| x || y)
    }

    fn logical_not(&self, a: &Tensor<bool>) -> Result<Tensor<bool>> {
        unary_map(self, a, |x| !x)
    }
}

impl ConditionalOps for CpuClient {
    fn where_cond<T: Element>(
        &self,
        cond: &Tensor<bool>,
        x: &Tensor<T>,
        y: &Tensor<T>,
    ) -> Result<Tensor<T>> {
        select(cond, x, y)
    }
}

impl ReduceOps for CpuClient {
    fn any(&self, a: &Tensor<bool>, dims: &[usize], keepdim: bool) -> Result<Tensor<bool>> {
        reduce_dims(a, dims, keepdim, false, |acc, v| acc || v)
    }

    fn count_nonzero<T: Element>(
        &self,
        a: &Tensor<T>,
        dims: &[usize],
        keepdim: bool,
    ) -> Result<Tensor<i64>> {
        reduce_dims(a, dims, keepdim, 0i64, |acc, v| acc + i64::from(v.is_nonzero()))
    }
}

impl IndexingOps for CpuClient {
    fn argmax<T: Element>(
        &self,
        a: &Tensor<T>,
        dim: Option<isize>,
        keepdim: bool,
    ) -> Result<Tensor<i64>> {
        // The first NaN wins, matching NumPy
        arg_reduce(a, dim, keepdim, "argmax", |v, best| {
            !is_nan(best) && (is_nan(v) || v > best)
        })
    }

    fn argmin<T: Element>(
        &self,
        a: &Tensor<T>,
        dim: Option<isize>,
        keepdim: bool,
    ) -> Result<Tensor<i64>> {
        arg_reduce(a, dim, keepdim, "argmin", |v, best| {
            !is_nan(best) && (is_nan(v) || v < best)
        })
    }

    fn gather<T: Element>(
        &self,
        a: &Tensor<T>,
        dim: isize,
        index: &Tensor<i64>,
    ) -> Result<Tensor<T>> {
        gather(a, dim, index)
    }
}

impl SortingOps for CpuClient {
    fn argsort<T: Element>(
        &self,
        a: &Tensor<T>,
        dim: isize,
        descending: bool,
    ) -> Result<Tensor<i64>> {
        argsort(a, dim, descending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_add_broadcasts() {
        let client = CpuClient::new();
        let a = Tensor::<f64>::from_slice(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
        let b = Tensor::<f64>::from_slice(&[10.0, 20.0], &[2]);
        let c = client.add(&a, &b).unwrap();
        assert_eq!(c.shape(), &[2, 2]);
        assert_eq!(c.to_vec(), vec![11.0, 22.0, 13.0, 24.0]);
    }

    #[test]
    fn test_incompatible_shapes() {
        let client = CpuClient::new();
        let a = Tensor::<f64>::zeros(&[2, 3]);
        let b = Tensor::<f64>::zeros(&[4]);
        assert!(matches!(client.mul(&a, &b), Err(Error::BroadcastError { .. })));
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let data: Vec<f64> = (0..4096).map(|i| i as f64 * 0.5).collect();
        let a = Tensor::<f64>::from_slice(&data, &[64, 64]);
        let seq = CpuClient::new().mul(&a, &a).unwrap();
        let par = CpuClient::new().with_min_parallel_len(16).mul(&a, &a).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_compare_and_logical() {
        let client = CpuClient::new();
        let a = Tensor::<f64>::from_slice(&[1.0, 0.0, 3.0], &[3]);
        let b = Tensor::<f64>::from_slice(&[1.0, 2.0, 0.0], &[3]);
        let ne = client.ne(&a, &b).unwrap();
        let lt = client.lt(&a, &b).unwrap();
        assert_eq!(ne.to_vec(), vec![false, true, true]);
        assert_eq!(client.logical_and(&ne, &lt).unwrap().to_vec(), vec![false, true, false]);
        assert_eq!(client.logical_not(&ne).unwrap().to_vec(), vec![true, false, false]);
    }

    #[test]
    fn test_reductions() {
        let client = CpuClient::new();
        let a = Tensor::<f64>::from_slice(&[1.0, -2.0, 0.0, 4.0], &[2, 2]);
        let mask = client.ne(&a, &Tensor::scalar(0.0)).unwrap();
        assert_eq!(client.any(&mask, &[1], false).unwrap().to_vec(), vec![true, true]);
        assert_eq!(client.any(&mask, &[0], true).unwrap().shape(), &[1, 2]);
        assert_eq!(client.count_nonzero(&a, &[0], false).unwrap().to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_argmax_along_dim() {
        let client = CpuClient::new();
        let a = Tensor::<i64>::from_slice(&[3, 9, 9, 1, 2, 0], &[2, 3]);
        assert_eq!(client.argmax(&a, Some(1), false).unwrap().to_vec(), vec![1, 1]);
        assert_eq!(client.argmin(&a, Some(-1), true).unwrap().shape(), &[2, 1]);
        assert_eq!(client.argmax(&a, None, false).unwrap().item().unwrap(), 1);
    }
}
