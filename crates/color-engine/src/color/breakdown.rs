//! Full color breakdown for presentation

use serde::{Deserialize, Serialize};

use super::{Cmyk, Hsl, Lab, Rgb};
use crate::error::ColorError;

/// Every representation of a sampled color that a display shows side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBreakdown {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub cmyk: Cmyk,
    pub lab: Lab,
}

impl ColorBreakdown {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: Hsl::from(rgb),
            cmyk: Cmyk::from(rgb),
            lab: Lab::from(rgb),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Ok(Self::from_rgb(Rgb::from_hex(hex)?))
    }

    /// Plain-text summary for sharing: name, hex, RGB and LAB rounded to
    /// integers, one per line.
    ///
    /// ```
    /// use color_engine::ColorBreakdown;
    ///
    /// let text = ColorBreakdown::from_hex("#ff0000").unwrap().share_text("Red");
    /// assert_eq!(text, "Name: Red\nHex: #ff0000\nRGB: 255, 0, 0\nLAB: 53, 80, 67");
    /// ```
    pub fn share_text(&self, name: &str) -> String {
        format!(
            "Name: {name}\nHex: {}\nRGB: {}, {}, {}\nLAB: {}, {}, {}",
            self.hex,
            self.rgb.r,
            self.rgb.g,
            self.rgb.b,
            // `+ 0.0` turns a rounded -0 into 0
            self.lab.l.round() + 0.0,
            self.lab.a.round() + 0.0,
            self.lab.b.round() + 0.0,
        )
    }
}
