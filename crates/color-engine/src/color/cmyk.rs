//! Naive CMYK conversion for display
//!
//! This is the device-independent formula, with no ink profile involved.

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// Cyan, magenta, yellow and key (black) in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.normalized();
        let max = r.max(g).max(b);

        if max == 0.0 {
            return Self {
                c: 0,
                m: 0,
                y: 0,
                k: 100,
            };
        }

        let k = 1.0 - max;
        let ink = |channel: f64| (1.0 - channel - k) / (1.0 - k);

        Self {
            c: percent(ink(r)),
            m: percent(ink(g)),
            y: percent(ink(b)),
            k: percent(k),
        }
    }
}

#[inline]
fn percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}
