//! CPU implementation of the polynomial operation traits
//!
//! All operations delegate to the shared `*_impl` functions, which are
//! written against the tensor operation traits.

use super::CpuClient;
use crate::array_ops::{
    Extreme, PolyArrayFunctions, absolute_impl, arg_extreme_impl, count_nonzero_impl,
    extreme_impl, pairwise_extreme_impl, sort_impl,
};
use crate::error::Result;
use crate::poly::arith::{
    add_impl, equal_impl, mul_impl, neg_impl, outer_impl, pow_impl, scale_impl, sub_impl,
    where_impl,
};
use crate::poly::call::evaluate_impl;
use crate::poly::ordering::sortable_proxy_impl;
use crate::poly::{
    Bindings, Evaluated, MonomialOrdering, PolyArithmeticOps, PolyArray, PolyEvaluateOps,
    PolyOrderingOps,
};
use crate::tensor::Tensor;

impl PolyArithmeticOps for CpuClient {
    fn poly_add(&self, a: &PolyArray, b: &PolyArray) -> Result<PolyArray> {
        add_impl(self, a, b)
    }

    fn poly_sub(&self, a: &PolyArray, b: &PolyArray) -> Result<PolyArray> {
        sub_impl(self, a, b)
    }

    fn poly_mul(&self, a: &PolyArray, b: &PolyArray) -> Result<PolyArray> {
        mul_impl(self, a, b)
    }

    fn poly_neg(&self, a: &PolyArray) -> Result<PolyArray> {
        neg_impl(self, a)
    }

    fn poly_scale(&self, a: &PolyArray, factor: f64) -> Result<PolyArray> {
        scale_impl(self, a, factor)
    }

    fn poly_pow(&self, a: &PolyArray, exponent: u32) -> Result<PolyArray> {
        pow_impl(self, a, exponent)
    }

    fn poly_outer(&self, plane: &Tensor<f64>, poly: &PolyArray) -> Result<PolyArray> {
        outer_impl(self, plane, poly)
    }

    fn poly_where(
        &self,
        condition: &Tensor<bool>,
        a: &PolyArray,
        b: &PolyArray,
    ) -> Result<PolyArray> {
        where_impl(self, condition, a, b)
    }

    fn poly_equal(&self, a: &PolyArray, b: &PolyArray) -> Result<Tensor<bool>> {
        equal_impl(self, a, b)
    }
}

impl PolyOrderingOps for CpuClient {
    fn sortable_proxy(&self, poly: &PolyArray, ordering: MonomialOrdering) -> Result<Tensor<i64>> {
        sortable_proxy_impl(poly, ordering)
    }
}

impl PolyEvaluateOps for CpuClient {
    fn evaluate(&self, poly: &PolyArray, bindings: &Bindings) -> Result<Evaluated> {
        evaluate_impl(self, poly, bindings)
    }
}

impl PolyArrayFunctions for CpuClient {
    fn poly_absolute(&self, a: &PolyArray) -> Result<PolyArray> {
        absolute_impl(self, a)
    }

    fn poly_amin(&self, a: &PolyArray, axis: Option<isize>) -> Result<PolyArray> {
        extreme_impl(self, a, axis, Extreme::Min)
    }

    fn poly_amax(&self, a: &PolyArray, axis: Option<isize>) -> Result<PolyArray> {
        extreme_impl(self, a, axis, Extreme::Max)
    }

    fn poly_argmin(&self, a: &PolyArray, axis: Option<isize>) -> Result<Tensor<i64>> {
        arg_extreme_impl(self, a, axis, Extreme::Min)
    }

    fn poly_argmax(&self, a: &PolyArray, axis: Option<isize>) -> Result<Tensor<i64>> {
        arg_extreme_impl(self, a, axis, Extreme::Max)
    }

    fn poly_minimum(&self, a: &PolyArray, b: &PolyArray) -> Result<PolyArray> {
        pairwise_extreme_impl(self, a, b, Extreme::Min)
    }

    fn poly_maximum(&self, a: &PolyArray, b: &PolyArray) -> Result<PolyArray> {
        pairwise_extreme_impl(self, a, b, Extreme::Max)
    }

    fn poly_count_nonzero(&self, a: &PolyArray, axis: Option<isize>) -> Result<Tensor<i64>> {
        count_nonzero_impl(self, a, axis)
    }

    fn poly_sort(&self, a: &PolyArray, axis: Option<isize>) -> Result<PolyArray> {
        sort_impl(self, a, axis)
    }
}
