//! Construction and validation of polynomial arrays
//!
//! Every polynomial array in the crate, whether built by a user, produced by
//! arithmetic, alignment, an array function or evaluation, is assembled by
//! [`assemble`]. It validates the attributes and then prunes unused terms and
//! indeterminates according to [`ConstructionOptions`].

use super::array::PolyArray;
use super::basis::{ExponentGrid, Exponents, MonomialBasis};
use crate::error::{ConstructionError, Result};
use crate::tensor::{Shape, Tensor};
use std::collections::HashSet;
use std::sync::Arc;

/// Default prefix of generated indeterminate names
pub const DEFAULT_VARNAME: &str = "q";

/// Options controlling how construction cleans its input
///
/// # Example
///
/// ```
/// use numpoly::poly::ConstructionOptions;
///
/// let options = ConstructionOptions::default()
///     .with_default_varname("z")
///     .with_retain_names(true);
/// assert_eq!(options.default_varname, "z");
/// assert!(!options.retain_coefficients);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructionOptions {
    /// Prefix used for generated names (`q0`, `q1`, ...)
    pub default_varname: String,
    /// Keep terms whose coefficients are zero everywhere
    pub retain_coefficients: bool,
    /// Keep indeterminates that no term uses
    pub retain_names: bool,
}

impl Default for ConstructionOptions {
    fn default() -> Self {
        Self {
            default_varname: DEFAULT_VARNAME.to_string(),
            retain_coefficients: false,
            retain_names: false,
        }
    }
}

impl ConstructionOptions {
    /// Options that keep every term and name as given
    pub fn retaining() -> Self {
        Self::default()
            .with_retain_coefficients(true)
            .with_retain_names(true)
    }

    /// Set the prefix of generated names
    pub fn with_default_varname(mut self, varname: impl Into<String>) -> Self {
        self.default_varname = varname.into();
        self
    }

    /// Keep or prune all-zero terms
    pub fn with_retain_coefficients(mut self, retain: bool) -> Self {
        self.retain_coefficients = retain;
        self
    }

    /// Keep or prune unused indeterminates
    pub fn with_retain_names(mut self, retain: bool) -> Self {
        self.retain_names = retain;
        self
    }

    /// `count` generated names: `<varname>0`, `<varname>1`, ...
    pub fn default_names(&self, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("{}{}", self.default_varname, i))
            .collect()
    }
}

/// Build a polynomial array with default options
///
/// `exponents` is a rank-2 grid with one row per monomial and one column per
/// indeterminate. `coefficients` has one leading entry per row; the rest of
/// its shape is the shape of the polynomial array. Names default to `q0`,
/// `q1`, ...
///
/// # Errors
///
/// Fails with [`ConstructionError`] when the grid rank is not 2, the row
/// count differs from the leading coefficient dimension, rows repeat, or the
/// names disagree with the column count or repeat.
///
/// # Example
///
/// ```
/// use numpoly::poly::{build, ExponentGrid};
/// use numpoly::tensor::Tensor;
///
/// // 1 + 2*x*y
/// let grid = ExponentGrid::from_rows(&[[0, 0], [1, 1]]).unwrap();
/// let coefficients = Tensor::<f64>::from_slice(&[1.0, 2.0], &[2]);
/// let poly = build(&grid, &coefficients, Some(&["x", "y"])).unwrap();
/// assert_eq!(poly.num_terms(), 2);
/// assert!(poly.shape().is_empty());
/// ```
pub fn build(
    exponents: &ExponentGrid,
    coefficients: &Tensor<f64>,
    names: Option<&[&str]>,
) -> Result<PolyArray> {
    build_with(exponents, coefficients, names, &ConstructionOptions::default())
}

/// Build a polynomial array with explicit options
///
/// See [`build`].
pub fn build_with(
    exponents: &ExponentGrid,
    coefficients: &Tensor<f64>,
    names: Option<&[&str]>,
    options: &ConstructionOptions,
) -> Result<PolyArray> {
    match exponents.ndim() {
        n if n < 2 => return Err(ConstructionError::ExponentRankTooLow { ndim: n }.into()),
        n if n > 2 => return Err(ConstructionError::ExponentRankTooHigh { ndim: n }.into()),
        _ => {}
    }
    let rows = exponents.shape()[0];
    let columns = exponents.shape()[1];

    let names: Vec<String> = match names {
        Some(names) => names.iter().map(|n| n.to_string()).collect(),
        None => options.default_names(columns),
    };
    let terms: Vec<Exponents> = (0..rows)
        .filter_map(|i| exponents.row(i))
        .map(Exponents::from_slice)
        .collect();

    assemble(terms, coefficients.clone(), Arc::from(names), columns, options)
}

/// The construction gate
///
/// Validates `(terms, coefficients, names)` and cleans the result according to
/// `options`. `columns` is the exponent width the terms were declared with.
/// The name list is shared with the result unless names are pruned.
pub(crate) fn assemble(
    terms: Vec<Exponents>,
    coefficients: Tensor<f64>,
    names: Arc<[String]>,
    columns: usize,
    options: &ConstructionOptions,
) -> Result<PolyArray> {
    let leading = coefficients.shape().first().copied().unwrap_or(0);
    if coefficients.ndim() == 0 || terms.len() != leading {
        return Err(ConstructionError::LengthMismatch {
            exponents: terms.len(),
            coefficients: leading,
        }
        .into());
    }

    let mut seen: HashSet<&[u32]> = HashSet::with_capacity(terms.len());
    for term in &terms {
        if !seen.insert(term.as_slice()) {
            return Err(ConstructionError::DuplicateExponents {
                exponent: term.to_vec(),
            }
            .into());
        }
    }

    if names.len() != columns || terms.iter().any(|t| t.len() != columns) {
        return Err(ConstructionError::NamesLengthMismatch {
            names: names.len(),
            columns,
        }
        .into());
    }

    let mut unique: HashSet<&str> = HashSet::with_capacity(names.len());
    for name in names.iter() {
        if !unique.insert(name.as_str()) {
            return Err(ConstructionError::DuplicateNames { name: name.clone() }.into());
        }
    }

    let shape = Shape::from(&coefficients.shape()[1..]);
    let coefficients = coefficients.contiguous();
    let (terms, coefficients) = if options.retain_coefficients {
        (terms, coefficients)
    } else {
        prune_terms(terms, &coefficients, &shape, columns)?
    };
    let (terms, names) = if options.retain_names {
        (terms, names)
    } else {
        prune_names(terms, names)
    };

    // An empty basis still represents zeros of the right shape
    let (terms, coefficients) = if terms.is_empty() {
        let nvars = names.len();
        (
            vec![Exponents::from_elem(0, nvars)],
            Tensor::zeros(&Shape::from([1]).concat(&shape)).contiguous(),
        )
    } else {
        (terms, coefficients)
    };

    let nvars = names.len();
    Ok(PolyArray::from_parts(
        names,
        MonomialBasis::new_unchecked(terms, nvars),
        coefficients,
    ))
}

/// Drop terms whose coefficient plane is zero everywhere
fn prune_terms(
    terms: Vec<Exponents>,
    coefficients: &Tensor<f64>,
    shape: &[usize],
    columns: usize,
) -> Result<(Vec<Exponents>, Tensor<f64>)> {
    let plane: usize = shape.iter().product();
    let data = coefficients.to_vec();
    let keep: Vec<bool> = if plane == 0 {
        vec![false; terms.len()]
    } else {
        data.chunks(plane)
            .map(|c| c.iter().any(|&v| v != 0.0))
            .collect()
    };
    if keep.iter().all(|&k| k) {
        return Ok((terms, coefficients.clone()));
    }

    let mut kept_terms = Vec::with_capacity(terms.len());
    let mut kept_data = Vec::with_capacity(data.len());
    for (i, (term, &k)) in terms.into_iter().zip(&keep).enumerate() {
        if k {
            kept_terms.push(term);
            kept_data.extend_from_slice(&data[i * plane..(i + 1) * plane]);
        }
    }

    if kept_terms.is_empty() {
        tracing::trace!("all terms vanish, keeping a zero constant term");
        kept_terms.push(Exponents::from_elem(0, columns));
        kept_data = vec![0.0; plane];
    } else {
        tracing::trace!(
            removed = keep.len() - kept_terms.len(),
            "pruned all-zero terms"
        );
    }

    let out_shape = Shape::from([kept_terms.len()]).concat(shape);
    Ok((kept_terms, Tensor::from_vec(kept_data, &out_shape)?))
}

/// Drop indeterminates whose exponent column is zero in every term
///
/// The first indeterminate is kept when none is used, so constants still
/// carry one name.
fn prune_names(terms: Vec<Exponents>, names: Arc<[String]>) -> (Vec<Exponents>, Arc<[String]>) {
    let mut used: Vec<bool> = (0..names.len())
        .map(|j| terms.iter().any(|t| t[j] != 0))
        .collect();
    if used.iter().all(|&u| u) {
        return (terms, names);
    }
    if !used.iter().any(|&u| u) {
        if let Some(first) = used.first_mut() {
            *first = true;
        }
    }

    let terms: Vec<Exponents> = terms
        .into_iter()
        .map(|t| {
            t.iter()
                .zip(&used)
                .filter(|(_, u)| **u)
                .map(|(&e, _)| e)
                .collect::<Exponents>()
        })
        .collect();
    let dropped: Vec<&str> = names
        .iter()
        .zip(&used)
        .filter(|(_, u)| !**u)
        .map(|(n, _)| n.as_str())
        .collect();
    tracing::trace!(?dropped, "pruned unused indeterminates");
    let names: Vec<String> = names
        .iter()
        .zip(&used)
        .filter(|(_, u)| **u)
        .map(|(n, _)| n.clone())
        .collect();
    (terms, Arc::from(names))
}
