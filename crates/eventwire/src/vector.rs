//! The 3-component vector field value.

use core::{fmt, str::FromStr};

use thiserror::Error;

use crate::format::{self, COMPONENT_SEPARATOR, DEFAULT_DECIMALS};

/// A 3-component vector, encoded on the wire as three fixed-point decimals
/// joined by commas in x,y,z order.
///
/// `Display` renders the wire encoding and honors an explicit formatter
/// precision, defaulting to [`DEFAULT_DECIMALS`] fractional digits.
/// `FromStr` parses it back.
///
/// # Examples
///
/// ```
/// use eventwire::Vec3;
///
/// let v = Vec3::new(1.0, 2.5, -3.0);
/// assert_eq!(v.to_string(), "1.00,2.50,-3.00");
/// assert_eq!(format!("{v:.1}"), "1.0,2.5,-3.0");
/// assert_eq!("1.00,2.50,-3.00".parse::<Vec3>(), Ok(v));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// The x component.
    pub x: f32,
    /// The y component.
    pub y: f32,
    /// The z component.
    pub z: f32,
}

impl Vec3 {
    /// The zero vector, the usual accessor default.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(DEFAULT_DECIMALS);
        format::write_vec3(f, *self, decimals)
    }
}

/// Error produced when a string is not a valid vector encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseVec3Error {
    /// The input did not split into exactly three comma-separated parts.
    #[error("expected 3 components, found {0}")]
    ComponentCount(usize),
    /// A part was not a decimal number.
    #[error("invalid component '{0}'")]
    InvalidComponent(String),
}

impl FromStr for Vec3 {
    type Err = ParseVec3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(COMPONENT_SEPARATOR);
        let (Some(x), Some(y), Some(z), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseVec3Error::ComponentCount(
                s.split(COMPONENT_SEPARATOR).count(),
            ));
        };
        let component = |raw: &str| {
            let raw = raw.trim();
            raw.parse::<f32>()
                .map_err(|_| ParseVec3Error::InvalidComponent(raw.to_owned()))
        };
        Ok(Self {
            x: component(x)?,
            y: component(y)?,
            z: component(z)?,
        })
    }
}
