//! CPU client

/// Default element count below which kernels stay sequential
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 1 << 15;

/// CPU client for operation dispatch
///
/// The client carries the kernel configuration; it holds no tensor state
/// and is cheap to clone.
///
/// # Example
///
/// ```
/// use numpoly::runtime::cpu::CpuClient;
///
/// let client = CpuClient::new().with_min_parallel_len(1024);
/// assert_eq!(client.rayon_min_len(), 1024);
/// ```
#[derive(Clone, Debug)]
pub struct CpuClient {
    min_parallel_len: usize,
}

impl CpuClient {
    /// Create a new CPU client with default configuration
    pub fn new() -> Self {
        Self {
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
        }
    }

    /// Set the element count from which element-wise kernels run in parallel
    ///
    /// Has no effect when the `rayon` feature is disabled.
    pub fn with_min_parallel_len(mut self, len: usize) -> Self {
        self.min_parallel_len = len.max(1);
        self
    }

    /// Element count from which element-wise kernels run in parallel
    #[inline]
    pub fn rayon_min_len(&self) -> usize {
        self.min_parallel_len
    }
}

impl Default for CpuClient {
    fn default() -> Self {
        Self::new()
    }
}
