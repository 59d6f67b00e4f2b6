//! Hex color parsing and RGB distance.
//!
//! # Example
//!
//! ```rust
//! use tinge::color::Rgb;
//!
//! let sky: Rgb = "#8ECAE6".parse().unwrap();
//! assert_eq!((sky.r, sky.g, sky.b), (142, 202, 230));
//! assert_eq!(sky.to_string(), "#8ECAE6");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::errors::ColorError;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Straight-line Euclidean distance to `other` in RGB space.
    ///
    /// Symmetric: `a.distance(b) == b.distance(a)`.
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

/// Returns true iff `input` is a 3- or 6-digit hex color code, with or
/// without the leading `#`.
///
/// Accepts exactly the inputs that parse as [`Rgb`].
pub fn is_valid_hex(input: &str) -> bool {
    input.parse::<Rgb>().is_ok()
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parses `#RRGGBB`, `RRGGBB`, `#RGB`, or `RGB`.
    ///
    /// The 3-digit shorthand expands per digit (the CSS rule), so `#abc`
    /// is `(0xAA, 0xBB, 0xCC)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidFormat(s.to_string()));
        }
        // All ASCII from here on, so byte slicing is safe.
        match digits.len() {
            6 => Ok(Rgb::new(
                channel(&digits[0..2], s)?,
                channel(&digits[2..4], s)?,
                channel(&digits[4..6], s)?,
            )),
            3 => Ok(Rgb::new(
                channel(&digits[0..1], s)? * 0x11,
                channel(&digits[1..2], s)? * 0x11,
                channel(&digits[2..3], s)? * 0x11,
            )),
            _ => Err(ColorError::InvalidFormat(s.to_string())),
        }
    }
}

/// Parses one or two hex digits into a channel value.
fn channel(digits: &str, original: &str) -> Result<u8, ColorError> {
    u8::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidFormat(original.to_string()))
}

impl fmt::Display for Rgb {
    /// Renders the canonical uppercase `#RRGGBB` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
