//! Array functions over polynomial arrays
//!
//! These mirror the scalar array API (`absolute`, `amin`, `argmax`,
//! `minimum`, `count_nonzero`, `sort`, ...) for polynomial arrays. They are
//! composed from the construction gate, the monomial ordering and the tensor
//! operation traits; comparisons use the graded reverse lexicographic
//! ordering.
//!
//! The functions are exposed through [`PolyArrayFunctions`] and can also be
//! looked up by name in the [dispatch registry](crate::dispatch).

mod absolute;
mod count_nonzero;
mod extrema;
mod minimum;
mod sort;
mod traits;

pub(crate) use absolute::absolute_impl;
pub(crate) use count_nonzero::count_nonzero_impl;
pub(crate) use extrema::{Extreme, arg_extreme_impl, extreme_impl};
pub(crate) use minimum::pairwise_extreme_impl;
pub(crate) use sort::sort_impl;
pub use traits::PolyArrayFunctions;
