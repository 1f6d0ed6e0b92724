//! Storage: host memory with Arc-based sharing

use crate::dtype::Element;
use std::sync::Arc;

/// Storage for tensor data
///
/// Storage wraps an immutable element buffer with reference counting, enabling
/// zero-copy views (broadcast, narrow, reshape, etc.) that share the underlying
/// buffer. Tensors never write through shared storage; every operation that
/// produces new values allocates a new buffer.
#[derive(Clone)]
pub struct Storage<T: Element> {
    inner: Arc<[T]>,
}

impl<T: Element> Storage<T> {
    /// Take ownership of an element buffer
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { inner: data.into() }
    }

    /// Copy a slice into new storage
    pub fn from_slice(data: &[T]) -> Self {
        Self { inner: data.into() }
    }

    /// Number of elements in the buffer
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the buffer holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// View the raw buffer
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Whether two storages share the same buffer
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Element> std::fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.len())
            .field("dtype", &T::DTYPE)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharing() {
        let a = Storage::from_vec(vec![1.0f64, 2.0]);
        let b = a.clone();
        let c = Storage::from_slice(a.as_slice());
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert_eq!(c.as_slice(), &[1.0, 2.0]);
    }
}
