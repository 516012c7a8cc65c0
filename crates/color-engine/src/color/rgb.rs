//! 8-bit sRGB color type
//!
//! [`Rgb`] is what the capture layer hands to the engine: one sampled pixel,
//! either as three bytes or as a hex string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// A gamma-encoded sRGB color with 8-bit channels.
///
/// `Rgb` is transient: it is converted to [`Lab`](super::Lab) for every
/// distance, naming or mixing operation and never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without a leading `#`.
    ///
    /// Parsing is case-insensitive and surrounding whitespace is trimmed.
    /// Anything else (wrong length, non-hex characters, sign prefixes)
    /// fails with [`ColorError::InvalidColorInput`].
    ///
    /// # Example
    ///
    /// ```
    /// use color_engine::Rgb;
    ///
    /// let coral = Rgb::from_hex("#FF7F50").unwrap();
    /// assert_eq!(coral, Rgb::new(255, 127, 80));
    ///
    /// assert!(Rgb::from_hex("#FFF").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColorInput(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ColorError::InvalidColorInput(format!("{hex:?}: {e}")))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as `#rrggbb` with lowercase, zero-padded digits.
    ///
    /// ```
    /// use color_engine::Rgb;
    /// assert_eq!(Rgb::new(10, 255, 0).to_hex(), "#0aff00");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels normalized to 0.0..=1.0.
    #[inline]
    pub fn normalized(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
