//! Bounded reuse pool for payload buffers.
//!
//! Frequent event dispatch builds many short-lived payload strings. The
//! pool keeps a small LIFO free list of cleared buffers so the hot path
//! reuses a warm allocation instead of growing a fresh one each time.
//! Everything takes `&mut self` and performs no locking: one pool belongs
//! to one logical thread of control, and callers that need more wrap the
//! pool externally or keep one per thread.

use crate::{builder::PayloadBuilder, options::PoolOptions};

/// Bounded LIFO pool of reusable payload buffers.
///
/// Buffers move by value: [`acquire`](Self::acquire) transfers ownership
/// out of the pool and [`release`](Self::release) transfers it back, so a
/// buffer has exactly one owner at any moment and a double release cannot
/// be written.
///
/// # Examples
///
/// ```
/// use eventwire::BufferPool;
///
/// let mut pool = BufferPool::default();
/// let buf = pool.acquire();
/// pool.release(buf);
/// assert_eq!(pool.pooled(), 1);
/// ```
#[derive(Debug)]
pub struct BufferPool {
    free: Vec<String>,
    options: PoolOptions,
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(PoolOptions::default())
    }
}

impl BufferPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new(options: PoolOptions) -> Self {
        Self {
            free: Vec::new(),
            options,
        }
    }

    /// Takes a buffer out of the pool, or allocates a fresh one.
    ///
    /// Pooled buffers come back cleared but keep their capacity. The most
    /// recently released buffer is handed out first.
    #[must_use]
    pub fn acquire(&mut self) -> String {
        match self.free.pop() {
            Some(mut buf) => {
                buf.clear();
                buf
            }
            None => String::with_capacity(self.options.initial_capacity),
        }
    }

    /// Returns a buffer to the pool, or drops it when the pool is full.
    pub fn release(&mut self, mut buf: String) {
        if self.free.len() < self.options.max_pooled {
            buf.clear();
            self.free.push(buf);
        }
    }

    /// Number of free buffers currently held.
    #[must_use]
    pub fn pooled(&self) -> usize {
        self.free.len()
    }

    /// Starts a chaining [`PayloadBuilder`] backed by a pooled buffer.
    ///
    /// The builder holds the pool borrowed until
    /// [`build`](PayloadBuilder::build) consumes it or the builder is
    /// dropped; either way the buffer comes back here.
    pub fn builder(&mut self) -> PayloadBuilder<'_> {
        PayloadBuilder::new(self)
    }

    /// Builds a payload with caller-managed formatting.
    ///
    /// Acquires a buffer, hands it to `assemble`, captures the result and
    /// releases the buffer. The caller appends raw content directly and is
    /// responsible for segment shape; nothing tracks separators here.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventwire::BufferPool;
    ///
    /// let mut pool = BufferPool::default();
    /// let payload = pool.build_with(|buf| buf.push_str("type=Hit|dmg=25"));
    /// assert_eq!(payload, "type=Hit|dmg=25");
    /// ```
    pub fn build_with(&mut self, assemble: impl FnOnce(&mut String)) -> String {
        let mut buf = self.acquire();
        assemble(&mut buf);
        let payload = buf.clone();
        self.release(buf);
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_on_empty_pool_allocates_default_capacity() {
        let mut pool = BufferPool::default();
        let buf = pool.acquire();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 256);
        assert_eq!(pool.pooled(), 0);
    }

    #[test]
    fn released_buffers_come_back_cleared() {
        let mut pool = BufferPool::default();
        let mut buf = pool.acquire();
        buf.push_str("type=Hit");
        pool.release(buf);
        assert_eq!(pool.pooled(), 1);

        let buf = pool.acquire();
        assert!(buf.is_empty());
        assert_eq!(pool.pooled(), 0);
    }

    #[test]
    fn acquire_pops_most_recently_released() {
        let mut pool = BufferPool::default();
        pool.release(String::with_capacity(64));
        pool.release(String::with_capacity(1024));

        assert!(pool.acquire().capacity() >= 1024);
        assert!(pool.acquire().capacity() < 1024);
    }

    #[test]
    fn release_beyond_bound_drops_the_buffer() {
        let mut pool = BufferPool::new(PoolOptions {
            max_pooled: 2,
            ..PoolOptions::default()
        });
        pool.release(String::new());
        pool.release(String::new());
        pool.release(String::with_capacity(4096));
        assert_eq!(pool.pooled(), 2);

        // The over-bound buffer was dropped, not stored.
        assert!(pool.acquire().capacity() < 4096);
        assert!(pool.acquire().capacity() < 4096);
    }

    #[test]
    fn build_with_releases_the_buffer() {
        let mut pool = BufferPool::default();
        let payload = pool.build_with(|buf| buf.push_str("a=1"));
        assert_eq!(payload, "a=1");
        assert_eq!(pool.pooled(), 1);
    }
}
