//! # numpoly
//!
//! **N-dimensional arrays of multivariate polynomials for Rust.**
//!
//! numpoly stores an array of polynomials as a monomial basis plus a dense
//! coefficient tensor with one plane per monomial, and exposes the usual array
//! API (absolute, amin, argmax, minimum, sort, ...) with polynomial elements.
//!
//! ## Features
//!
//! - **Construction**: validated from exponents, coefficients and names
//! - **Ordering**: deterministic monomial orderings (L, R, G, GR) and a
//!   sortable integer proxy for whole elements
//! - **Evaluation**: substitute scalars, arrays or polynomials for
//!   indeterminates, with broadcasting
//! - **Array functions**: reductions and comparisons that treat each element
//!   as a polynomial
//!
//! ## Quick Start
//!
//! ```rust
//! use numpoly::prelude::*;
//!
//! let client = CpuClient::new();
//! let x = PolyArray::symbol("x")?;
//! let y = PolyArray::symbol("y")?;
//!
//! let p = client.poly_add(&client.poly_mul(&x, &y)?, &x)?;
//! let value = client.evaluate(&p, &Bindings::new().named("x", 2.0).named("y", 3.0))?;
//! assert_eq!(value.as_numeric().unwrap().item()?, 8.0);
//! # Ok::<(), numpoly::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded element-wise kernels

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod array_ops;
pub mod dispatch;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod poly;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::array_ops::PolyArrayFunctions;
    pub use crate::dtype::DType;
    pub use crate::error::{ConstructionError, Error, Result};
    pub use crate::ops::{
        BinaryOps, CompareOps, ConditionalOps, IndexingOps, LogicalOps, ReduceOps, ScalarOps,
        SortingOps, TensorOps, UnaryOps,
    };
    pub use crate::poly::{
        Bindings, ConstructionOptions, Evaluated, ExponentGrid, MonomialOrdering, PolyArithmeticOps,
        PolyArray, PolyEvaluateOps, PolyOrderingOps, Value, build, build_with,
    };
    pub use crate::runtime::cpu::CpuClient;
    pub use crate::tensor::{Layout, Shape, Tensor};
}
