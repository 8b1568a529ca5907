#![forbid(unsafe_code)]

//! RGB colours with hex parsing and contrast helpers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

/// Pure black.
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
/// Pure white.
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Pack into `0xRRGGBB`.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse `#RGB` or `#RRGGBB` (the `#` is optional, digits are
    /// case-insensitive).
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                input: s.to_string(),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::InvalidDigit {
                input: s.to_string(),
            })
        };
        match hex.len() {
            3 => Ok(Self::new(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            6 => Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            len => Err(ColorParseError::InvalidLength {
                input: s.to_string(),
                len,
            }),
        }
    }

    /// Compute perceived luminance (BT.709) as a `u8` (0 = black, 255 = white).
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        // ITU-R BT.709 luma: 0.2126 R + 0.7152 G + 0.0722 B
        let r = self.r as u32;
        let g = self.g as u32;
        let b = self.b as u32;
        let luma = 2126 * r + 7152 * g + 722 * b;
        ((luma + 5000) / 10_000) as u8
    }

    /// Legible text colour on top of this one: black on light, white on dark.
    #[must_use]
    pub fn contrast_text(self) -> Self {
        if self.luminance_u8() >= 128 { BLACK } else { WHITE }
    }

    /// Channel-wise average of two colours (rounded half up).
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        const fn avg(a: u8, b: u8) -> u8 {
            ((a as u16 + b as u16 + 1) / 2) as u8
        }
        Self::new(
            avg(self.r, other.r),
            avg(self.g, other.g),
            avg(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}

/// Failure to read a hex colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Wrong number of hex digits (3 or 6 accepted).
    InvalidLength { input: String, len: usize },
    /// Something other than a hex digit after the optional `#`.
    InvalidDigit { input: String },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { input, len } => write!(
                f,
                "colour {input:?} has {len} hex digits (expected 3 or 6)"
            ),
            Self::InvalidDigit { input } => write!(f, "colour {input:?} is not hexadecimal"),
        }
    }
}

impl std::error::Error for ColorParseError {}
