//! Hex color parsing for manifest `BackgroundColor` values
//!
//! Accepts `RRGGBB` or `AARRGGBB`, with or without a leading `#`.

use miette::Diagnostic;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a hex color
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Wrong number of digits once the `#` is stripped
    #[error("This does not appear to be a proper hex color number")]
    #[diagnostic(
        code(appx_visuals::color::invalid_length),
        help("expected 6 (RRGGBB) or 8 (AARRGGBB) hex digits")
    )]
    InvalidLength { value: String },

    /// A channel could not be decoded as hexadecimal
    #[error("Invalid hex digits {digits:?} in color value")]
    #[diagnostic(code(appx_visuals::color::invalid_digits))]
    InvalidDigits { digits: String },
}

/// A color with 8-bit alpha, red, green and blue channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Uppercase `#AARRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// Uppercase `RRGGBB`, alpha dropped
    pub fn to_rgb_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Argb {
    /// Opaque white
    fn default() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Argb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Parse a hex color string into its channels.
///
/// Six digits are read as `RRGGBB` with alpha fixed at 255; eight digits
/// are read as `AARRGGBB`. Digits are case-insensitive.
pub fn parse_color(hex: &str) -> Result<Argb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let mut color = Argb::default();
    let start = match digits.chars().count() {
        8 => {
            color.a = channel(digits, 0)?;
            2
        }
        6 => 0,
        _ => {
            return Err(ColorError::InvalidLength {
                value: hex.to_string(),
            })
        }
    };

    color.r = channel(digits, start)?;
    color.g = channel(digits, start + 2)?;
    color.b = channel(digits, start + 4)?;

    Ok(color)
}

/// Decode the two digits starting at `offset`
fn channel(digits: &str, offset: usize) -> Result<u8, ColorError> {
    let invalid = || ColorError::InvalidDigits {
        digits: digits.chars().skip(offset).take(2).collect(),
    };

    // `get` refuses to split a multi-byte char, which also means non-ASCII input
    let pair = digits.get(offset..offset + 2).ok_or_else(invalid)?;
    if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    u8::from_str_radix(pair, 16).map_err(|_| invalid())
}
