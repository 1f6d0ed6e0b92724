//! Element trait for mapping Rust types to DType

use super::DType;
use std::fmt::Debug;

/// Trait for types that can be elements of a tensor
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - tensors share storage across threads
/// - `PartialOrd` - comparison for min/max/argmax kernels
/// - `Debug` - tensors print their contents
pub trait Element: Copy + Send + Sync + Debug + PartialEq + PartialOrd + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Whether this value counts as non-zero
    fn is_nonzero(self) -> bool;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn is_nonzero(self) -> bool {
        self != 0.0
    }
}

impl Element for i64 {
    const DTYPE: DType = DType::I64;

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn is_nonzero(self) -> bool {
        self != 0
    }
}

impl Element for bool {
    const DTYPE: DType = DType::Bool;

    #[inline]
    fn zero() -> Self {
        false
    }

    #[inline]
    fn one() -> Self {
        true
    }

    #[inline]
    fn is_nonzero(self) -> bool {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonzero() {
        assert!(!0.0f64.is_nonzero());
        assert!(!(-0.0f64).is_nonzero());
        assert!(2.5f64.is_nonzero());
        assert!(!0i64.is_nonzero());
        assert!(true.is_nonzero());
        assert_eq!(<f64 as Element>::DTYPE, DType::F64);
    }
}
