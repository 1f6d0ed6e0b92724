//! Shared helpers for polynomial operations

use crate::error::{Error, Result};

/// Normalize a possibly negative axis of an array with `ndim` dimensions
pub(crate) fn normalize_axis(axis: isize, ndim: usize) -> Result<usize> {
    let resolved = if axis < 0 {
        axis + ndim as isize
    } else {
        axis
    };
    usize::try_from(resolved)
        .ok()
        .filter(|&d| d < ndim)
        .ok_or(Error::InvalidDimension { dim: axis, ndim })
}

/// Split a name into its prefix and trailing integer, if any
fn split_numeric_suffix(name: &str) -> (&str, Option<u64>) {
    let digits = name.len() - name.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let (prefix, suffix) = name.split_at(name.len() - digits);
    (prefix, suffix.parse().ok())
}

/// Natural ordering of indeterminate names: `q2` sorts before `q10`
pub(crate) fn natural_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    let (pa, na) = split_numeric_suffix(a);
    let (pb, nb) = split_numeric_suffix(b);
    pa.cmp(pb).then(na.cmp(&nb)).then_with(|| a.cmp(b))
}
