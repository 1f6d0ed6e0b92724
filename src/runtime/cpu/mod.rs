//! CPU runtime implementation
//!
//! The CPU runtime provides the reference implementation of every tensor
//! operation trait and of the polynomial operation traits.
//!
//! # Broadcasting
//!
//! NumPy-style broadcasting is supported for all element-wise operations.
//! Shapes are right-aligned and expanded where one operand has size 1.
//!
//! # Non-contiguous Tensors
//!
//! Operations handle non-contiguous tensors (including stride-0 broadcast
//! views) by walking the layout in logical order. Contiguous operands of
//! equal shape take a flat fast path, parallelised with rayon above the
//! client's minimum parallel length.

mod client;
pub(crate) mod kernels;
mod ops;
mod polynomial;

pub use crate::tensor::Tensor;
pub use client::CpuClient;
