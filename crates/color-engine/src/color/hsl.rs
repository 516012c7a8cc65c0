//! HSL conversion for display

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// Hue, saturation and lightness rounded to whole numbers.
///
/// Hue is in degrees (0..=360; a hue just below 360 rounds up to 360),
/// saturation and lightness are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self {
                h: 0,
                s: 0,
                l: percent(l),
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Sextant is chosen by the dominant channel
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;

        Self {
            h: (h * 360.0).round() as u16,
            s: percent(s),
            l: percent(l),
        }
    }
}

#[inline]
fn percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}
