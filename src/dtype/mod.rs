//! Element types for numpoly tensors
//!
//! Coefficient planes are always `f64`. Index results (argmin, argmax, counts)
//! use `i64`, and comparison masks use `bool`.

mod element;

pub use element::Element;

use std::fmt;

/// Runtime tag for the element type stored in a tensor
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 64-bit IEEE float
    F64,
    /// 64-bit signed integer
    I64,
    /// Boolean
    Bool,
}

impl DType {
    /// Short lowercase name, matching the usual array-library spelling
    pub const fn name(self) -> &'static str {
        match self {
            DType::F64 => "f64",
            DType::I64 => "i64",
            DType::Bool => "bool",
        }
    }

    /// Size of one element in bytes
    pub const fn size_in_bytes(self) -> usize {
        match self {
            DType::F64 | DType::I64 => 8,
            DType::Bool => 1,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
