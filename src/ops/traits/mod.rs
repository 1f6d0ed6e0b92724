//! Operation traits for tensor operations.
//!
//! This module contains trait definitions for the tensor operations.
//! The implementation lives in the CPU runtime (`runtime/cpu`).

mod binary;
mod compare;
mod conditional;
mod indexing;
mod logical;
mod reduce;
mod scalar;
mod sorting;
mod unary;

pub use binary::BinaryOps;
pub use compare::CompareOps;
pub use conditional::ConditionalOps;
pub use indexing::IndexingOps;
pub use logical::LogicalOps;
pub use reduce::ReduceOps;
pub use scalar::ScalarOps;
pub use sorting::SortingOps;
pub use unary::UnaryOps;
