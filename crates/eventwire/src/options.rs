/// Configuration for a [`BufferPool`](crate::BufferPool).
///
/// # Examples
///
/// ```
/// use eventwire::{BufferPool, PoolOptions};
///
/// let mut pool = BufferPool::new(PoolOptions {
///     max_pooled: 2,
///     ..PoolOptions::default()
/// });
/// assert_eq!(pool.pooled(), 0);
/// # let _ = pool.acquire();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PoolOptions {
    /// Capacity of freshly allocated buffers, sized so a typical payload
    /// never forces a re-grow.
    ///
    /// # Default
    ///
    /// `256`
    pub initial_capacity: usize,

    /// Maximum number of free buffers the pool retains. A release while the
    /// pool is full drops the buffer instead of storing it.
    ///
    /// # Default
    ///
    /// `10`
    pub max_pooled: usize,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 256,
            max_pooled: 10,
        }
    }
}
