//! Tolerant payload parsing and typed field access.
//!
//! Parsing never fails and accessors never error: malformed segments are
//! dropped during the split, and a value that does not convert to the
//! requested type degrades to the caller-supplied default. Event dispatch
//! must survive any payload shape, so the whole read path is silent about
//! bad data.

use std::collections::BTreeMap;

use crate::{
    format::{self, KEY_VALUE_SEPARATOR, SEGMENT_SEPARATOR},
    vector::Vec3,
};

/// Mapping of field keys to their raw (still textual) values.
pub type Fields = BTreeMap<String, String>;

/// A payload decomposed into its fields.
///
/// Built fresh by [`parse`](Self::parse) and owned by the caller; it keeps
/// no tie to the payload string it came from.
///
/// # Examples
///
/// ```
/// use eventwire::ParsedPayload;
///
/// let data = ParsedPayload::parse("type=Hit|dmg=25");
/// assert_eq!(data.get_str("type", "?"), "Hit");
/// assert_eq!(data.get_int("dmg", 0), 25);
/// assert_eq!(data.get_int("heal", 0), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPayload {
    fields: Fields,
}

impl ParsedPayload {
    /// Splits a payload into its fields.
    ///
    /// Empty input yields an empty mapping. The payload is split on `|`,
    /// each segment on `=`; a segment without exactly one `=` is silently
    /// discarded, and the segments around it are kept. Accepted keys and
    /// values are trimmed of surrounding whitespace. When a key repeats,
    /// the last occurrence wins.
    ///
    /// ```
    /// use eventwire::ParsedPayload;
    ///
    /// let data = ParsedPayload::parse("a=1||b=2|badsegment|c=3");
    /// assert_eq!(data.len(), 3);
    /// assert_eq!(data.get("b"), Some("2"));
    /// ```
    #[must_use]
    pub fn parse(payload: &str) -> Self {
        let mut fields = Fields::new();
        if payload.is_empty() {
            return Self { fields };
        }
        for segment in payload.split(SEGMENT_SEPARATOR) {
            let mut halves = segment.split(KEY_VALUE_SEPARATOR);
            // Exactly one `=` per segment; anything else is dropped.
            if let (Some(key), Some(value), None) = (halves.next(), halves.next(), halves.next()) {
                fields.insert(key.trim().to_owned(), value.trim().to_owned());
            }
        }
        Self { fields }
    }

    /// Raw value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// String field, or `default` when the key is absent.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Integer field, or `default` when the key is absent or the value is
    /// not a signed decimal integer.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    /// Float field, or `default` when the key is absent or the value is
    /// not numeric.
    #[must_use]
    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        self.get(key).and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    /// Boolean field. Only the exact literals `true` and `false` count;
    /// anything else, including an absent key, yields `default`.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(format::parse_bool).unwrap_or(default)
    }

    /// Vector field, or `default` unless the value is exactly three
    /// comma-separated numbers.
    #[must_use]
    pub fn get_vec3(&self, key: &str, default: Vec3) -> Vec3 {
        self.get(key).and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    /// Number of fields recovered from the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` when no fields were recovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether a field with `key` was present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterates the fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
