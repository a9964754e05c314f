//! Wire-format rules shared by the builder and the parser.
//!
//! A payload is a flat sequence of `key=value` segments joined by `|`;
//! vector values join three fixed-point components with `,`. There is no
//! escaping mechanism: a key or value containing a separator corrupts the
//! payload, and both sides of the codec treat that as a caller contract
//! rather than something to detect.

use core::fmt::{self, Write};

use crate::vector::Vec3;

/// Separator between `key=value` segments.
pub(crate) const SEGMENT_SEPARATOR: char = '|';

/// Separator between a key and its value within one segment.
pub(crate) const KEY_VALUE_SEPARATOR: char = '=';

/// Separator between vector components.
pub(crate) const COMPONENT_SEPARATOR: char = ',';

/// Fractional digits used by float and vector encodings when the caller
/// does not pass an explicit precision.
pub const DEFAULT_DECIMALS: usize = 2;

/// Writes `value` as fixed-point decimal text with `decimals` fractional
/// digits.
pub(crate) fn write_fixed<W: Write>(out: &mut W, value: f32, decimals: usize) -> fmt::Result {
    write!(out, "{value:.decimals$}")
}

/// Writes a vector as three fixed-point components in x,y,z order.
pub(crate) fn write_vec3<W: Write>(out: &mut W, v: Vec3, decimals: usize) -> fmt::Result {
    write_fixed(out, v.x, decimals)?;
    out.write_char(COMPONENT_SEPARATOR)?;
    write_fixed(out, v.y, decimals)?;
    out.write_char(COMPONENT_SEPARATOR)?;
    write_fixed(out, v.z, decimals)
}

/// Appends a decimal integer to a payload buffer.
pub(crate) fn push_int(out: &mut String, value: i64) {
    write!(out, "{value}").expect("write to String is infallible");
}

/// Appends fixed-point decimal text to a payload buffer.
pub(crate) fn push_fixed(out: &mut String, value: f32, decimals: usize) {
    write_fixed(out, value, decimals).expect("write to String is infallible");
}

/// Appends an encoded vector to a payload buffer.
pub(crate) fn push_vec3(out: &mut String, v: Vec3, decimals: usize) {
    write_vec3(out, v, decimals).expect("write to String is infallible");
}

/// The wire literal for a boolean value.
pub(crate) fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Decodes a boolean field. Only the exact literals `true` and `false`
/// match; everything else is `None`.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
