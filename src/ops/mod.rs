//! Tensor operations
//!
//! This module defines the operation traits the polynomial layer consumes
//! from the dense tensor engine. Operations are traits implemented by a
//! client type ([`CpuClient`](crate::runtime::cpu::CpuClient)), so polynomial
//! algorithms are written once against the trait bounds they need.
//!
//! ```text
//! CpuClient
//!   └── implements TensorOps
//!         ├── add, sub, mul                    (binary arithmetic)
//!         ├── neg, abs                         (unary operations)
//!         ├── mul_scalar                       (scalar operations)
//!         ├── eq, ne, lt, gt                   (comparisons → bool masks)
//!         ├── logical_and, logical_or, ...     (mask algebra)
//!         ├── where_cond                       (masked selection)
//!         ├── any, count_nonzero               (reductions)
//!         ├── argmax, argmin, gather           (indexing)
//!         └── argsort                          (stable sorting)
//! ```
//!
//! # Broadcasting
//!
//! Every element-wise operation follows NumPy-style broadcasting and fails
//! with [`Error::BroadcastError`](crate::error::Error::BroadcastError) on
//! incompatible shapes.

mod traits;

pub use traits::{
    BinaryOps, CompareOps, ConditionalOps, IndexingOps, LogicalOps, ReduceOps, ScalarOps,
    SortingOps, UnaryOps,
};

/// Every operation family the polynomial algorithms rely on
///
/// Blanket-implemented for any client that implements all of the individual
/// operation traits.
pub trait TensorOps:
    BinaryOps
    + UnaryOps
    + ScalarOps
    + CompareOps
    + LogicalOps
    + ConditionalOps
    + ReduceOps
    + IndexingOps
    + SortingOps
{
}

impl<C> TensorOps for C where
    C: BinaryOps
        + UnaryOps
        + ScalarOps
        + CompareOps
        + LogicalOps
        + ConditionalOps
        + ReduceOps
        + IndexingOps
        + SortingOps
{
}
