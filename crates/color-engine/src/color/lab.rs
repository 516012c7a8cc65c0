//! CIE 1976 L*a*b* under the D65 white point
//!
//! LAB is the canonical representation for every distance, naming and mixing
//! operation. It is always derived from an [`Rgb`] through the fixed
//! sRGB → XYZ → LAB transform below; the inverse in [`Lab::to_rgb`] exists for
//! previews of mixed colors.

use serde::{Deserialize, Serialize};

use super::gamma::{decode_u8, linear_to_srgb, quantize};
use super::rgb::Rgb;
use crate::error::ColorError;

/// D65 reference white (CIE 1931 2° observer).
pub const D65_WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

/// CIE epsilon, 216/24389.
/// Largest accepted magnitude of any LAB component.
pub const MAX_LAB_COMPONENT: f64 = 1000.0;

const EPSILON: f64 = 216.0 / 24389.0;

/// CIE kappa, 24389/27.
const KAPPA: f64 = 24389.0 / 27.0;

/// Linear sRGB to XYZ (D65).
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ (D65) to linear sRGB.
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// A color in CIE L*a*b* space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green (negative) to red (positive), roughly -128..=127
/// - `b`: Blue (negative) to yellow (positive), roughly -128..=127
///
/// Values are not clamped. Mixtures and dataset records may leave the
/// nominal ranges; only non-finite components and magnitudes beyond
/// [`MAX_LAB_COMPONENT`] are rejected (see [`Lab::validated`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a color from its lightness and two opponent axes.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// True when all three components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }

    /// Return `self` if every component is finite and within
    /// `±MAX_LAB_COMPONENT`.
    ///
    /// Distance and naming code calls this at its entry points so that a NaN
    /// or an overflowing magnitude never travels through a comparison and
    /// silently picks a wrong match.
    pub fn validated(self) -> Result<Self, ColorError> {
        if !self.is_finite() {
            return Err(ColorError::InvalidColorInput(format!(
                "non-finite LAB ({}, {}, {})",
                self.l, self.a, self.b
            )));
        }
        if [self.l, self.a, self.b]
            .iter()
            .any(|v| v.abs() > MAX_LAB_COMPONENT)
        {
            return Err(ColorError::InvalidColorInput(format!(
                "LAB ({}, {}, {}) out of range, components must lie within ±{MAX_LAB_COMPONENT}",
                self.l, self.a, self.b
            )));
        }
        Ok(self)
    }

    /// Chroma: the length of the (a, b) vector.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Hue angle in radians, `atan2(b, a)`, in -π..=π.
    #[inline]
    pub fn hue_radians(self) -> f64 {
        self.b.atan2(self.a)
    }

    /// Convert back to 8-bit sRGB.
    ///
    /// This is the algebraic inverse of `Lab::from(Rgb)`. Out-of-gamut
    /// results are clamped per channel, so only in-gamut colors round-trip.
    ///
    /// # Example
    ///
    /// ```
    /// use color_engine::{Lab, Rgb};
    ///
    /// let teal = Rgb::new(0, 128, 128);
    /// assert_eq!(Lab::from(teal).to_rgb(), teal);
    /// ```
    pub fn to_rgb(self) -> Rgb {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let xyz = [
            D65_WHITE[0] * lab_f_inverse(fx),
            D65_WHITE[1] * lab_f_inverse(fy),
            D65_WHITE[2] * lab_f_inverse(fz),
        ];
        let [r, g, b] = mat3_mul(&XYZ_TO_RGB, xyz);

        Rgb::new(
            quantize(linear_to_srgb(r)),
            quantize(linear_to_srgb(g)),
            quantize(linear_to_srgb(b)),
        )
    }
}

impl From<Rgb> for Lab {
    /// Convert an 8-bit sRGB color to LAB (D65).
    ///
    /// Channels are linearized, taken to XYZ with the sRGB matrix, normalized
    /// by the D65 white and run through the CIE `f(t)` transform.
    fn from(rgb: Rgb) -> Self {
        let linear = [decode_u8(rgb.r), decode_u8(rgb.g), decode_u8(rgb.b)];
        let [x, y, z] = mat3_mul(&RGB_TO_XYZ, linear);

        let fx = lab_f(x / D65_WHITE[0]);
        let fy = lab_f(y / D65_WHITE[1]);
        let fz = lab_f(z / D65_WHITE[2]);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// CIE `f(t)`: cube root above epsilon, linear segment below.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Inverse of [`lab_f`].
#[inline]
fn lab_f_inverse(f: f64) -> f64 {
    let cube = f * f * f;
    if cube > EPSILON {
        cube
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

#[inline]
fn mat3_mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}
