//! Evaluation of polynomial arrays
//!
//! Evaluation substitutes values for indeterminates. Values may be scalars,
//! numeric tensors or polynomial arrays; they are broadcast against each
//! other and the result gains their common shape after the shape of the
//! evaluated array.

use super::align::{align_to_names, common_names};
use super::arith::{add_impl, mul_impl, outer_impl, pow_impl};
use super::array::PolyArray;
use crate::error::{Error, Result};
use crate::ops::TensorOps;
use crate::tensor::{Shape, Tensor, broadcast_shapes};
use std::sync::Arc;

/// A value substituted for an indeterminate
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Plain number, contributes no dimensions
    Scalar(f64),
    /// Numeric array
    Array(Tensor<f64>),
    /// Polynomial array
    Poly(PolyArray),
}

impl Value {
    /// Shape the value contributes to broadcasting
    pub fn shape(&self) -> &[usize] {
        match self {
            Value::Scalar(_) => &[],
            Value::Array(t) => t.shape(),
            Value::Poly(p) => p.shape(),
        }
    }

    fn to_poly(&self) -> Result<PolyArray> {
        match self {
            Value::Scalar(v) => PolyArray::constant(&Tensor::scalar(*v)),
            Value::Array(t) => PolyArray::constant(t),
            Value::Poly(p) => Ok(p.clone()),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<Tensor<f64>> for Value {
    fn from(t: Tensor<f64>) -> Self {
        Value::Array(t)
    }
}

impl From<PolyArray> for Value {
    fn from(p: PolyArray) -> Self {
        Value::Poly(p)
    }
}

impl From<&PolyArray> for Value {
    fn from(p: &PolyArray) -> Self {
        Value::Poly(p.clone())
    }
}

/// Substitutions for an evaluation
///
/// Positional values bind to indeterminates in declared order; named values
/// bind by name. Bindings are checked against the evaluated array's names
/// before any computation.
///
/// # Example
///
/// ```
/// use numpoly::poly::Bindings;
///
/// let bindings = Bindings::new().arg(1.0).named("y", 2.0);
/// assert_eq!(bindings.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl Bindings {
    /// Empty bindings; evaluating with them copies the array
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings from positional values only
    pub fn positional<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: Vec::new(),
        }
    }

    /// Append a positional value
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Bind a value by name
    pub fn named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.push((name.into(), value.into()));
        self
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Whether nothing is bound
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Match the bindings against `names`, one slot per name
    ///
    /// Surplus positional values are an error; they are never dropped.
    ///
    /// # Errors
    ///
    /// - `DuplicateBinding` if a name is bound twice
    /// - `UnknownIndeterminate` if a named value matches no name
    /// - `InvalidArgument` if there are more positional values than names
    pub fn resolve(&self, names: &[String]) -> Result<Vec<Option<Value>>> {
        if self.positional.len() > names.len() {
            return Err(Error::invalid_argument(
                "bindings",
                format!(
                    "{} positional values given for {} indeterminates",
                    self.positional.len(),
                    names.len()
                ),
            ));
        }

        let mut slots: Vec<Option<Value>> = vec![None; names.len()];
        for (slot, value) in slots.iter_mut().zip(&self.positional) {
            *slot = Some(value.clone());
        }

        for (name, value) in &self.named {
            let index = names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| Error::UnknownIndeterminate { name: name.clone() })?;
            if slots[index].is_some() {
                return Err(Error::DuplicateBinding { name: name.clone() });
            }
            slots[index] = Some(value.clone());
        }
        Ok(slots)
    }
}

/// Result of an evaluation
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluated {
    /// Indeterminates remain
    Poly(PolyArray),
    /// Every element evaluated to a constant
    Numeric(Tensor<f64>),
}

impl Evaluated {
    /// Whether the result is a plain numeric array
    pub fn is_numeric(&self) -> bool {
        matches!(self, Evaluated::Numeric(_))
    }

    /// The polynomial result, if any
    pub fn as_poly(&self) -> Option<&PolyArray> {
        match self {
            Evaluated::Poly(p) => Some(p),
            Evaluated::Numeric(_) => None,
        }
    }

    /// The numeric result, if any
    pub fn as_numeric(&self) -> Option<&Tensor<f64>> {
        match self {
            Evaluated::Numeric(t) => Some(t),
            Evaluated::Poly(_) => None,
        }
    }

    /// Convert into a polynomial array; numeric results become constants
    pub fn into_poly(self) -> Result<PolyArray> {
        match self {
            Evaluated::Poly(p) => Ok(p),
            Evaluated::Numeric(t) => PolyArray::constant(&t),
        }
    }
}

/// Evaluate `poly` under `bindings`
pub(crate) fn evaluate_impl<C: TensorOps>(
    client: &C,
    poly: &PolyArray,
    bindings: &Bindings,
) -> Result<Evaluated> {
    if bindings.is_empty() {
        return Ok(Evaluated::Poly(poly.deep_copy()));
    }
    let slots = bindings.resolve(poly.names())?;

    // Unbound indeterminates substitute themselves
    let values = slots
        .into_iter()
        .zip(poly.names())
        .map(|(slot, name)| match slot {
            Some(value) => value.to_poly(),
            None => PolyArray::symbol(name),
        })
        .collect::<Result<Vec<_>>>()?;

    let mut common = Shape::new();
    for value in &values {
        common = broadcast_shapes(&common, value.shape())
            .ok_or_else(|| Error::broadcast(&common, value.shape()))?;
    }
    let out_shape = Shape::from(poly.shape()).concat(&common);
    tracing::debug!(
        poly_shape = ?poly.shape(),
        common_shape = ?common.as_slice(),
        output_shape = ?out_shape.as_slice(),
        "evaluating polynomial"
    );

    let ones = PolyArray::constant(&Tensor::ones(&common))?;
    let mut out: Option<PolyArray> = None;
    for (k, exponent) in poly.exponents().iter().enumerate() {
        let mut term = ones.clone();
        for (value, &power) in values.iter().zip(exponent.iter()) {
            if power == 0 {
                continue;
            }
            term = mul_impl(client, &term, &pow_impl(client, value, power)?)?;
        }
        let contribution = outer_impl(client, &poly.coefficient_plane(k)?, &term)?;
        out = Some(match out {
            Some(acc) => add_impl(client, &acc, &contribution)?,
            None => contribution,
        });
    }

    let Some(out) = out else {
        return Ok(Evaluated::Numeric(Tensor::zeros(&out_shape).contiguous()));
    };
    if out.is_constant() {
        return Ok(Evaluated::Numeric(out.to_tensor()?));
    }

    // Keep the declared names when they cover the result, else take the union
    let covered = out
        .names()
        .iter()
        .all(|n| poly.names().contains(n));
    let names: Arc<[String]> = if covered {
        Arc::clone(poly.shared_names())
    } else {
        common_names(&[poly, &out])
    };
    align_to_names(&out, &names).map(Evaluated::Poly)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_slots() {
        let slots = Bindings::new()
            .arg(1.0)
            .named("z", 3.0)
            .resolve(&names(&["x", "y", "z"]))
            .unwrap();
        assert_eq!(slots[0], Some(Value::Scalar(1.0)));
        assert_eq!(slots[1], None);
        assert_eq!(slots[2], Some(Value::Scalar(3.0)));
    }

    #[test]
    fn test_resolve_duplicate() {
        let err = Bindings::new()
            .arg(1.0)
            .named("x", 2.0)
            .resolve(&names(&["x", "y"]))
            .unwrap_err();
        assert_eq!(err, Error::DuplicateBinding { name: "x".into() });

        let err = Bindings::new()
            .named("y", 1.0)
            .named("y", 2.0)
            .resolve(&names(&["x", "y"]))
            .unwrap_err();
        assert_eq!(err, Error::DuplicateBinding { name: "y".into() });
    }

    #[test]
    fn test_resolve_unknown() {
        let err = Bindings::new()
            .named("w", 1.0)
            .resolve(&names(&["x", "y"]))
            .unwrap_err();
        assert_eq!(err, Error::UnknownIndeterminate { name: "w".into() });
    }

    #[test]
    fn test_too_many_positional() {
        let err = Bindings::positional([1.0, 2.0, 3.0])
            .resolve(&names(&["x", "y"]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}
