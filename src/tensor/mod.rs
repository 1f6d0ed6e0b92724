//! Tensor types and operations
//!
//! This module provides the dense `Tensor` type the polynomial layer is built
//! on: an n-dimensional array of [`Element`](crate::dtype::Element)s held in
//! shared host memory and addressed through a [`Layout`].

mod core;
mod layout;
mod shape;
mod storage;
mod strides;

pub use core::Tensor;
pub use layout::{Layout, Offsets, broadcast_shapes};
pub use shape::Shape;
pub use storage::Storage;
pub use strides::Strides;
