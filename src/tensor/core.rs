//! Core Tensor type

use super::{Layout, Shape, Storage, broadcast_shapes};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional array stored in host memory
///
/// `Tensor` consists of:
/// - **Storage**: Reference-counted element buffer
/// - **Layout**: Shape, strides, and offset defining the view into storage
///
/// # Zero-Copy Views
///
/// Operations like `broadcast_to`, `narrow`, `unsqueeze` and `reshape` (on
/// contiguous input) create new tensors that share the same underlying
/// storage. Storage is never written after creation, so sharing is invisible
/// to callers.
///
/// # Example
///
/// ```
/// use numpoly::tensor::Tensor;
///
/// let a = Tensor::<f64>::from_slice(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
/// let row = a.select(0, 1).unwrap();
/// assert_eq!(row.to_vec(), vec![3.0, 4.0]);
/// ```
pub struct Tensor<T: Element = f64> {
    storage: Storage<T>,
    layout: Layout,
}

impl<T: Element> Tensor<T> {
    /// Create a tensor from storage and layout
    pub fn from_parts(storage: Storage<T>, layout: Layout) -> Self {
        Self { storage, layout }
    }

    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not match the element count of `shape`.
    /// Use [`Self::try_from_slice`] for a fallible version.
    pub fn from_slice(data: &[T], shape: &[usize]) -> Self {
        Self::try_from_slice(data, shape).unwrap_or_else(|e| panic!("Tensor::from_slice: {e}"))
    }

    /// Create a tensor from a slice of data (fallible version)
    pub fn try_from_slice(data: &[T], shape: &[usize]) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Create a tensor taking ownership of a data buffer
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(Error::shape_mismatch(&[expected], &[data.len()]));
        }

        Ok(Self {
            storage: Storage::from_vec(data),
            layout: Layout::contiguous(shape),
        })
    }

    /// Create a 0-dimensional tensor holding one value
    pub fn scalar(value: T) -> Self {
        Self {
            storage: Storage::from_vec(vec![value]),
            layout: Layout::scalar(),
        }
    }

    /// Create a tensor filled with a value
    ///
    /// The fill value is stored once and broadcast over `shape`.
    pub fn full(shape: &[usize], value: T) -> Self {
        let layout = Layout::scalar()
            .broadcast_to(shape)
            .unwrap_or_else(|| Layout::contiguous(shape));
        Self {
            storage: Storage::from_vec(vec![value]),
            layout,
        }
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, T::zero())
    }

    /// Create a tensor filled with ones
    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, T::one())
    }

    // ===== Accessors =====

    /// Get the storage
    #[inline]
    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Get the total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Check if the tensor is contiguous in memory
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Check if this is a scalar (0-dimensional tensor)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.is_scalar()
    }

    /// Normalize a possibly negative dimension index
    pub fn normalize_dim(&self, dim: isize) -> Result<usize> {
        self.layout
            .normalize_dim(dim)
            .ok_or(Error::InvalidDimension {
                dim,
                ndim: self.ndim(),
            })
    }

    fn with_layout(&self, layout: Layout) -> Self {
        Self {
            storage: self.storage.clone(),
            layout,
        }
    }

    // ===== View Operations =====

    /// Reshape to a new shape (zero-copy if contiguous)
    pub fn reshape(&self, shape: &[usize]) -> Result<Self> {
        let count: usize = shape.iter().product();
        if count != self.numel() {
            return Err(Error::shape_mismatch(shape, self.shape()));
        }

        match self.layout.reshape(shape) {
            Some(layout) => Ok(self.with_layout(layout)),
            None => self.contiguous().reshape(shape),
        }
    }

    /// Flatten to 1D (zero-copy if contiguous)
    pub fn flatten(&self) -> Result<Self> {
        self.reshape(&[self.numel()])
    }

    /// Remove a dimension of size 1
    pub fn squeeze(&self, dim: isize) -> Result<Self> {
        let d = self.normalize_dim(dim)?;
        if self.shape()[d] != 1 {
            return Err(Error::invalid_argument(
                "dim",
                format!("cannot squeeze dimension {d} of size {}", self.shape()[d]),
            ));
        }
        Ok(self.with_layout(self.layout.squeeze(d)))
    }

    /// Add a dimension of size 1
    ///
    /// Negative `dim` counts from the end of the new shape: `-1` appends.
    pub fn unsqueeze(&self, dim: isize) -> Result<Self> {
        let ndim = self.ndim() as isize;
        let idx = if dim < 0 { ndim + dim + 1 } else { dim };
        let layout = usize::try_from(idx)
            .ok()
            .and_then(|idx| self.layout.unsqueeze(idx))
            .ok_or(Error::InvalidDimension {
                dim,
                ndim: self.ndim(),
            })?;
        Ok(self.with_layout(layout))
    }

    /// Narrow a dimension (zero-copy slice)
    pub fn narrow(&self, dim: isize, start: usize, length: usize) -> Result<Self> {
        let d = self.normalize_dim(dim)?;
        let layout = self
            .layout
            .narrow(d, start, length)
            .ok_or(Error::IndexOutOfBounds {
                index: (start + length) as i64,
                size: self.shape()[d],
            })?;
        Ok(self.with_layout(layout))
    }

    /// Select a single index along a dimension, removing that dimension
    pub fn select(&self, dim: isize, index: usize) -> Result<Self> {
        let d = self.normalize_dim(dim)?;
        if index >= self.shape()[d] {
            return Err(Error::IndexOutOfBounds {
                index: index as i64,
                size: self.shape()[d],
            });
        }
        let narrowed = self.narrow(d as isize, index, 1)?;
        Ok(narrowed.with_layout(narrowed.layout.squeeze(d)))
    }

    /// Broadcast to a target shape (zero-copy)
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Self> {
        let layout = self
            .layout
            .broadcast_to(shape)
            .ok_or_else(|| Error::broadcast(self.shape(), shape))?;
        Ok(self.with_layout(layout))
    }

    /// Broadcast this tensor and `other` to their common shape
    pub fn broadcast_with<U: Element>(&self, other: &Tensor<U>) -> Result<(Self, Tensor<U>)> {
        let shape = broadcast_shapes(self.shape(), other.shape())
            .ok_or_else(|| Error::broadcast(self.shape(), other.shape()))?;
        Ok((self.broadcast_to(&shape)?, other.broadcast_to(&shape)?))
    }

    /// Return a tensor with row-major contiguous storage
    ///
    /// Shares storage when the tensor already is contiguous.
    pub fn contiguous(&self) -> Self {
        if self.is_contiguous() && self.storage.len() == self.numel() {
            return self.clone();
        }
        self.deep_copy()
    }

    /// Copy the elements into freshly allocated storage
    pub fn deep_copy(&self) -> Self {
        Self {
            storage: Storage::from_vec(self.to_vec()),
            layout: Layout::contiguous(self.shape()),
        }
    }

    /// Stack equally shaped tensors along a new leading dimension
    pub fn stack(tensors: &[Tensor<T>]) -> Result<Self> {
        let first = tensors
            .first()
            .ok_or_else(|| Error::invalid_argument("tensors", "cannot stack an empty list"))?;
        let shape = Shape::from(first.shape());

        let mut data = Vec::with_capacity(tensors.len() * shape.numel());
        for tensor in tensors {
            if tensor.shape() != shape.as_slice() {
                return Err(Error::shape_mismatch(&shape, tensor.shape()));
            }
            data.extend(tensor.iter());
        }

        let out_shape = Shape::from([tensors.len()]).concat(&shape);
        Self::from_vec(data, &out_shape)
    }

    // ===== Element access =====

    /// Iterate over elements in row-major logical order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = T> + '_ {
        let data = self.storage.as_slice();
        self.layout.offsets().map(move |i| data[i])
    }

    /// Borrow the elements as one slice when the layout is row-major contiguous
    pub fn contiguous_slice(&self) -> Option<&[T]> {
        if !self.is_contiguous() {
            return None;
        }
        let start = self.layout.offset();
        self.storage.as_slice().get(start..start + self.numel())
    }

    /// Copy elements into a `Vec` in row-major logical order
    pub fn to_vec(&self) -> Vec<T> {
        match self.contiguous_slice() {
            Some(slice) => slice.to_vec(),
            None => self.iter().collect(),
        }
    }

    /// Element at the given multi-index
    pub fn get(&self, indices: &[usize]) -> Option<T> {
        self.layout
            .index(indices)
            .map(|i| self.storage.as_slice()[i])
    }

    /// Extract the value of a single-element tensor
    pub fn item(&self) -> Result<T> {
        if self.numel() != 1 {
            return Err(Error::shape_mismatch(&[], self.shape()));
        }
        Ok(self.storage.as_slice()[self.layout.offset()])
    }

    /// Apply a function to every element
    pub fn map<U: Element>(&self, f: impl Fn(T) -> U) -> Tensor<U> {
        Tensor {
            storage: Storage::from_vec(self.iter().map(f).collect()),
            layout: Layout::contiguous(self.shape()),
        }
    }

    /// Whether both tensors read from the same buffer
    pub fn shares_storage(&self, other: &Self) -> bool {
        self.storage.ptr_eq(&other.storage)
    }
}

impl<T: Element> Clone for Tensor<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            layout: self.layout.clone(),
        }
    }
}

impl<T: Element> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.iter().eq(other.iter())
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &T::DTYPE)
            .field("data", &self.to_vec())
            .finish()
    }
}

impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor({:?}, shape={:?})", self.to_vec(), self.shape())
    }
}

impl From<f64> for Tensor<f64> {
    fn from(value: f64) -> Self {
        Tensor::scalar(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_and_shape() {
        let t = Tensor::<f64>::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t.numel(), 6);
        assert!(t.is_contiguous());
        assert!(Tensor::<f64>::try_from_slice(&[1.0, 2.0], &[3]).is_err());
    }

    #[test]
    fn test_full_is_broadcast() {
        let t = Tensor::<f64>::full(&[2, 2], 7.0);
        assert_eq!(t.to_vec(), vec![7.0; 4]);
        assert_eq!(t.storage().len(), 1);
        assert_eq!(t.contiguous().storage().len(), 4);
    }

    #[test]
    fn test_select_and_narrow() {
        let t = Tensor::<f64>::from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &[2, 3]);
        assert_eq!(t.select(1, 2).unwrap().to_vec(), vec![2.0, 5.0]);
        assert_eq!(t.select(0, 1).unwrap().to_vec(), vec![3.0, 4.0, 5.0]);
        assert_eq!(t.narrow(1, 1, 2).unwrap().to_vec(), vec![1.0, 2.0, 4.0, 5.0]);
        assert!(t.select(0, 2).is_err());
    }

    #[test]
    fn test_reshape_non_contiguous_copies() {
        let t = Tensor::<f64>::from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &[2, 3]);
        let column = t.narrow(1, 1, 2).unwrap();
        let flat = column.reshape(&[4]).unwrap();
        assert_eq!(flat.to_vec(), vec![1.0, 2.0, 4.0, 5.0]);
        assert!(t.reshape(&[4]).is_err());
    }

    #[test]
    fn test_unsqueeze_negative() {
        let t = Tensor::<f64>::zeros(&[2, 3]);
        assert_eq!(t.unsqueeze(-1).unwrap().shape(), &[2, 3, 1]);
        assert_eq!(t.unsqueeze(0).unwrap().shape(), &[1, 2, 3]);
        assert!(t.unsqueeze(4).is_err());
    }

    #[test]
    fn test_stack() {
        let a = Tensor::<f64>::from_slice(&[1.0, 2.0], &[2]);
        let b = Tensor::<f64>::from_slice(&[3.0, 4.0], &[2]);
        let s = Tensor::stack(&[a, b]).unwrap();
        assert_eq!(s.shape(), &[2, 2]);
        assert_eq!(s.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);

        let c = Tensor::<f64>::zeros(&[3]);
        assert!(Tensor::stack(&[s.select(0, 0).unwrap(), c]).is_err());
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let a = Tensor::<f64>::from_slice(&[1.0, 2.0], &[2]);
        let b = a.deep_copy();
        assert_eq!(a, b);
        assert!(!a.shares_storage(&b));
        assert!(a.shares_storage(&a.clone()));
    }

    #[test]
    fn test_broadcast_error() {
        let a = Tensor::<f64>::zeros(&[3]);
        let b = Tensor::<f64>::zeros(&[4]);
        assert!(matches!(
            a.broadcast_with(&b),
            Err(Error::BroadcastError { .. })
        ));
    }
}
