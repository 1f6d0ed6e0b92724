//! Error types for numpoly

use thiserror::Error;

/// Result type alias using numpoly's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in numpoly operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A polynomial array could not be constructed from its attributes
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// An indeterminate was bound both positionally and by name
    #[error("Multiple values for indeterminate '{name}'")]
    DuplicateBinding {
        /// The indeterminate bound twice
        name: String,
    },

    /// A named binding does not match any declared indeterminate
    #[error("Unexpected indeterminate '{name}'")]
    UnknownIndeterminate {
        /// The unmatched name
        name: String,
    },

    /// Shapes cannot be broadcast together
    #[error("Cannot broadcast shapes {lhs:?} and {rhs:?}")]
    BroadcastError {
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
    },

    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Invalid dimension index
    #[error("Invalid dimension {dim} for tensor with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid dimension
        dim: isize,
        /// Number of dimensions
        ndim: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: i64,
        /// Size of the dimension
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// No handler registered under the requested key
    #[error("No implementation registered for '{key}'")]
    UnknownFunction {
        /// The requested key
        key: String,
    },

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a broadcast error
    pub fn broadcast(lhs: &[usize], rhs: &[usize]) -> Self {
        Self::BroadcastError {
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

/// Reasons a set of polynomial attributes is rejected at construction time
///
/// Every kind is independently matchable so callers and tests can tell the
/// failures apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// Exponent grid has fewer than two dimensions
    #[error("Expected exponents.ndim == 2; found {ndim}")]
    ExponentRankTooLow {
        /// Rank of the offending grid
        ndim: usize,
    },

    /// Exponent grid has more than two dimensions
    #[error("Expected exponents.ndim == 2; found {ndim}")]
    ExponentRankTooHigh {
        /// Rank of the offending grid
        ndim: usize,
    },

    /// Number of exponent rows differs from the coefficient leading dimension
    #[error("Expected len(exponents) == len(coefficients); found {exponents} != {coefficients}")]
    LengthMismatch {
        /// Number of exponent rows
        exponents: usize,
        /// Leading dimension of the coefficients
        coefficients: usize,
    },

    /// The same exponent row appears more than once
    #[error("Exponents must be unique; {exponent:?} appears more than once")]
    DuplicateExponents {
        /// The repeated exponent row
        exponent: Vec<u32>,
    },

    /// Number of names differs from the exponent column count
    #[error("Expected len(names) == exponents.shape[1]; found {names} != {columns}")]
    NamesLengthMismatch {
        /// Number of names supplied
        names: usize,
        /// Number of exponent columns
        columns: usize,
    },

    /// The same indeterminate name appears more than once
    #[error("Indeterminate names must be unique; '{name}' appears more than once")]
    DuplicateNames {
        /// The repeated name
        name: String,
    },

    /// Exponent grid data does not fill its declared shape
    #[error("Exponent grid of shape {shape:?} needs {expected} values; found {got}")]
    GridSizeMismatch {
        /// Declared grid shape
        shape: Vec<usize>,
        /// Number of values the shape implies
        expected: usize,
        /// Number of values supplied
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_error_converts() {
        let err: Error = ConstructionError::DuplicateNames {
            name: "x".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError::DuplicateNames { .. })
        ));
        assert_eq!(
            err.to_string(),
            "Indeterminate names must be unique; 'x' appears more than once"
        );
    }

    #[test]
    fn test_broadcast_message() {
        let err = Error::broadcast(&[2, 3], &[4]);
        assert_eq!(err.to_string(), "Cannot broadcast shapes [2, 3] and [4]");
    }
}
