//! CIEDE2000 color difference
//!
//! [`delta_e_2000`] is the single color-difference metric of the engine. Both
//! [`ColorNamer`](crate::ColorNamer) and
//! [`PaintMixOptimizer`](crate::PaintMixOptimizer) score with it.
//!
//! The implementation follows Sharma, Wu & Dalal, "The CIEDE2000
//! Color-Difference Formula: Implementation Notes, Supplementary Test Data,
//! and Mathematical Observations" (2005), with kL = kC = kH = 1. All
//! weighting terms use the mean of both colors, so the metric is symmetric.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::color::Lab;

/// ΔE above which a mix recipe is flagged for manual correction.
pub const COLOR_CORRECTION_THRESHOLD: f64 = 1.5;

/// CIEDE2000 difference between two LAB colors. Always >= 0.
///
/// # Example
///
/// ```
/// use color_engine::{delta_e_2000, Lab};
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((delta_e_2000(a, b) - 2.0425).abs() < 1e-4);
/// ```
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    // Chroma-dependent a-axis rescale
    let c_mean = (lab1.chroma() + lab2.chroma()) / 2.0;
    let g = 0.5 * (1.0 - chroma_weight(c_mean));

    let a1 = lab1.a * (1.0 + g);
    let a2 = lab2.a * (1.0 + g);
    let c1 = a1.hypot(lab1.b);
    let c2 = a2.hypot(lab2.b);
    let h1 = hue_degrees(a1, lab1.b);
    let h2 = hue_degrees(a2, lab2.b);

    let achromatic = c1 * c2 == 0.0;

    let dl = lab2.l - lab1.l;
    let dc = c2 - c1;
    let dh = if achromatic {
        0.0
    } else {
        let diff = h2 - h1;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let d_big_h = 2.0 * (c1 * c2).sqrt() * (dh.to_radians() / 2.0).sin();

    let l_mean = (lab1.l + lab2.l) / 2.0;
    let c_prime_mean = (c1 + c2) / 2.0;
    let h_mean = if achromatic {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let l_offset = (l_mean - 50.0).powi(2);
    let sl = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let sc = 1.0 + 0.045 * c_prime_mean;
    let sh = 1.0 + 0.015 * c_prime_mean * t;

    // Blue-region rotation
    let d_theta = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let rt = -2.0 * chroma_weight(c_prime_mean) * (2.0 * d_theta).to_radians().sin();

    let l_term = dl / sl;
    let c_term = dc / sc;
    let h_term = d_big_h / sh;

    // |RT| stays below 2, so the radicand is never negative.
    (l_term * l_term + c_term * c_term + h_term * h_term + rt * c_term * h_term).sqrt()
}

/// `sqrt(C^7 / (C^7 + 25^7))`, written as `1 / sqrt(1 + (25/C)^7)` so that
/// a large chroma saturates at 1 instead of overflowing to `inf / inf`.
#[inline]
fn chroma_weight(c: f64) -> f64 {
    1.0 / (1.0 + (25.0 / c).powi(7)).sqrt()
}

/// Hue angle in degrees, 0..360. Zero for the achromatic origin.
#[inline]
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a) * 180.0 / PI;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// True when a ΔE is large enough that a recipe needs manual correction.
#[inline]
pub fn needs_color_correction(delta_e: f64) -> bool {
    delta_e > COLOR_CORRECTION_THRESHOLD
}

/// How a ΔE00 value is perceived by a standard observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaECategory {
    /// Below 1.0
    Imperceptible,
    /// 1.0 to 2.0, visible on close inspection
    CloseInspection,
    /// 2.0 to 10.0, visible at a glance
    AtAGlance,
    /// 10.0 to 50.0
    MoreSimilarThanOpposite,
    /// 50.0 and above
    Opposite,
}

impl DeltaECategory {
    pub fn from_delta_e(delta_e: f64) -> Self {
        if delta_e < 1.0 {
            Self::Imperceptible
        } else if delta_e < 2.0 {
            Self::CloseInspection
        } else if delta_e < 10.0 {
            Self::AtAGlance
        } else if delta_e < 50.0 {
            Self::MoreSimilarThanOpposite
        } else {
            Self::Opposite
        }
    }

    /// Human-readable description.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Imperceptible => "Not perceptible by the human eye",
            Self::CloseInspection => "Perceptible through close observation",
            Self::AtAGlance => "Perceptible at a glance",
            Self::MoreSimilarThanOpposite => "Colors are more similar than opposite",
            Self::Opposite => "Colors are exact opposites",
        }
    }
}
