//! Arrays of multivariate polynomials
//!
//! A [`PolyArray`] stores an N-dimensional array of polynomials over a shared
//! list of indeterminates as a [`MonomialBasis`] plus a coefficient tensor
//! with one plane per basis entry.
//!
//! # Modules
//!
//! - construction: [`build`], [`build_with`] and [`ConstructionOptions`]; the
//!   single gate every polynomial array passes through
//! - ordering: [`MonomialOrdering`], [`order`] and the sortable proxy
//! - alignment: [`align_polynomials`] and its parts
//! - evaluation: [`Bindings`], [`Value`], [`Evaluated`]
//!
//! Operations that compute on coefficients are client traits
//! ([`PolyArithmeticOps`], [`PolyOrderingOps`], [`PolyEvaluateOps`])
//! implemented by [`CpuClient`](crate::runtime::cpu::CpuClient).

mod align;
pub(crate) mod arith;
mod array;
mod basis;
pub(crate) mod call;
mod construct;
pub(crate) mod helpers;
pub(crate) mod ordering;
mod traits;

pub use align::{align_exponents, align_indeterminants, align_polynomials, align_shape};
pub use arith::stack;
pub use array::PolyArray;
pub use basis::{ExponentGrid, Exponents, MonomialBasis};
pub use call::{Bindings, Evaluated, Value};
pub use construct::{ConstructionOptions, DEFAULT_VARNAME, build, build_with};
pub use ordering::{MonomialOrdering, argsort_monomials, order};
pub use traits::{PolyArithmeticOps, PolyEvaluateOps, PolyOrderingOps};
