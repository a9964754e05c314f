//! Chaining payload assembly over a pooled buffer.

use crate::{
    format::{self, DEFAULT_DECIMALS, KEY_VALUE_SEPARATOR, SEGMENT_SEPARATOR},
    pool::BufferPool,
    vector::Vec3,
};

/// Fluent builder that appends typed `key=value` segments into a pooled
/// buffer.
///
/// Created by [`BufferPool::builder`]. Every `add_*` call consumes and
/// returns the builder, and [`build`](Self::build) consumes it for good:
/// the payload string is captured, the backing buffer goes back to the
/// pool, and any further use is a move error. Dropping a builder without
/// building discards the accumulated content and still returns the buffer.
///
/// The separator before each segment is placed by a first-field flag
/// rather than trimmed afterwards, keeping assembly a single linear append
/// pass. Keys are appended as given: a key containing `|` or `=` corrupts
/// the format, which has no escaping.
///
/// # Examples
///
/// ```
/// use eventwire::BufferPool;
///
/// let mut pool = BufferPool::default();
/// let payload = pool
///     .builder()
///     .add_str("type", "Quest")
///     .add_int("stage", 3)
///     .add_bool("done", false)
///     .build();
/// assert_eq!(payload, "type=Quest|stage=3|done=false");
/// ```
#[derive(Debug)]
pub struct PayloadBuilder<'pool> {
    pool: &'pool mut BufferPool,
    // `Some` until `build` or `Drop` takes the buffer out.
    buf: Option<String>,
    first: bool,
}

impl<'pool> PayloadBuilder<'pool> {
    pub(crate) fn new(pool: &'pool mut BufferPool) -> Self {
        let buf = pool.acquire();
        Self {
            pool,
            buf: Some(buf),
            first: true,
        }
    }

    /// Appends the segment separator unless this is the first segment.
    fn separate(&mut self) -> &mut String {
        let buf = self.buf.as_mut().expect("buffer taken only by build/drop");
        if self.first {
            self.first = false;
        } else {
            buf.push(SEGMENT_SEPARATOR);
        }
        buf
    }

    fn append(mut self, key: &str, encode: impl FnOnce(&mut String)) -> Self {
        let buf = self.separate();
        buf.push_str(key);
        buf.push(KEY_VALUE_SEPARATOR);
        encode(buf);
        self
    }

    /// Appends a string field, value inserted verbatim.
    #[must_use]
    pub fn add_str(self, key: &str, value: &str) -> Self {
        self.append(key, |buf| buf.push_str(value))
    }

    /// Appends a signed integer field in decimal.
    #[must_use]
    pub fn add_int(self, key: &str, value: i64) -> Self {
        self.append(key, |buf| format::push_int(buf, value))
    }

    /// Appends a boolean field as the literal `true` or `false`.
    #[must_use]
    pub fn add_bool(self, key: &str, value: bool) -> Self {
        self.append(key, |buf| buf.push_str(format::bool_literal(value)))
    }

    /// Appends a float field with [`DEFAULT_DECIMALS`] fractional digits.
    #[must_use]
    pub fn add_float(self, key: &str, value: f32) -> Self {
        self.add_float_with(key, value, DEFAULT_DECIMALS)
    }

    /// Appends a float field with an explicit fixed-point precision.
    #[must_use]
    pub fn add_float_with(self, key: &str, value: f32, decimals: usize) -> Self {
        self.append(key, |buf| format::push_fixed(buf, value, decimals))
    }

    /// Appends a vector field with [`DEFAULT_DECIMALS`] fractional digits
    /// per component.
    #[must_use]
    pub fn add_vec3(self, key: &str, value: Vec3) -> Self {
        self.add_vec3_with(key, value, DEFAULT_DECIMALS)
    }

    /// Appends a vector field with an explicit fixed-point precision.
    #[must_use]
    pub fn add_vec3_with(self, key: &str, value: Vec3, decimals: usize) -> Self {
        self.append(key, |buf| format::push_vec3(buf, value, decimals))
    }

    /// Appends a pre-formatted segment verbatim.
    ///
    /// Separator placement still applies; the caller supplies the
    /// `key=value` shape.
    #[must_use]
    pub fn add_raw(mut self, segment: &str) -> Self {
        self.separate().push_str(segment);
        self
    }

    /// Captures the payload, returns the backing buffer to the pool and
    /// consumes the builder.
    #[must_use]
    pub fn build(mut self) -> String {
        let buf = self.buf.take().expect("buffer taken only by build/drop");
        let payload = buf.clone();
        self.pool.release(buf);
        payload
    }
}

impl Drop for PayloadBuilder<'_> {
    fn drop(&mut self) {
        if let Some(buf) = self.buf.take() {
            self.pool.release(buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{BufferPool, Vec3};

    #[test]
    fn single_field_has_no_separators() {
        let mut pool = BufferPool::default();
        let payload = pool.builder().add_str("type", "Quest").build();
        assert_eq!(payload, "type=Quest");
    }

    #[test]
    fn fields_keep_add_order() {
        let mut pool = BufferPool::default();
        let payload = pool.builder().add_int("a", 1).add_int("b", 2).build();
        assert_eq!(payload, "a=1|b=2");
    }

    #[test]
    fn typed_encodings() {
        let mut pool = BufferPool::default();
        let payload = pool
            .builder()
            .add_int("n", -42)
            .add_bool("ok", true)
            .add_float("hp", 0.5)
            .add_float_with("ratio", 0.125, 3)
            .add_vec3("at", Vec3::new(1.0, -2.0, 0.25))
            .build();
        assert_eq!(payload, "n=-42|ok=true|hp=0.50|ratio=0.125|at=1.00,-2.00,0.25");
    }

    #[test]
    fn vec3_with_custom_precision() {
        let mut pool = BufferPool::default();
        let payload = pool
            .builder()
            .add_vec3_with("v", Vec3::new(1.0, 2.0, 3.0), 1)
            .build();
        assert_eq!(payload, "v=1.0,2.0,3.0");
    }

    #[test]
    fn raw_segments_share_separator_logic() {
        let mut pool = BufferPool::default();
        let payload = pool
            .builder()
            .add_raw("type=Hit")
            .add_raw("dmg=25")
            .build();
        assert_eq!(payload, "type=Hit|dmg=25");
    }

    #[test]
    fn build_returns_the_buffer_to_the_pool() {
        let mut pool = BufferPool::default();
        let _payload = pool.builder().add_int("a", 1).build();
        assert_eq!(pool.pooled(), 1);

        // The second build reuses the pooled buffer.
        let _payload = pool.builder().add_int("b", 2).build();
        assert_eq!(pool.pooled(), 1);
    }

    #[test]
    fn dropping_an_unfinished_builder_releases_the_buffer() {
        let mut pool = BufferPool::default();
        {
            let _builder = pool.builder().add_str("half", "done");
        }
        assert_eq!(pool.pooled(), 1);
    }
}
