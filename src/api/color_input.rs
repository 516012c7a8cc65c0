//! Shared request/response shapes for colors.

use color_engine::{Cmyk, ColorBreakdown, ColorDatabaseEntry, Hsl, Lab, Rgb};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// A color given as exactly one of hex, RGB or LAB
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ColorInput {
    /// Hex color, e.g. "#E30022" (the `#` is optional)
    #[serde(default)]
    pub hex: Option<String>,
    /// 8-bit sRGB channels
    #[serde(default)]
    pub rgb: Option<RgbDto>,
    /// CIE L*a*b* (D65)
    #[serde(default)]
    pub lab: Option<LabDto>,
}

impl ColorInput {
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self {
            hex: Some(hex.into()),
            ..Default::default()
        }
    }

    /// Resolve to sRGB. LAB input is not accepted here since it may be out of gamut.
    pub fn to_rgb(&self) -> Result<Rgb, ApiError> {
        match (&self.hex, &self.rgb, &self.lab) {
            (Some(hex), None, None) => Ok(Rgb::from_hex(hex)?),
            (None, Some(rgb), None) => Ok(Rgb::new(rgb.r, rgb.g, rgb.b)),
            (None, None, Some(_)) => Err(ApiError::BadRequest(
                "expected hex or rgb, LAB is not accepted here".to_string(),
            )),
            _ => Err(ApiError::BadRequest(
                "provide exactly one of hex or rgb".to_string(),
            )),
        }
    }

    /// Resolve to LAB, validating that every component is finite and in range
    pub fn to_lab(&self) -> Result<Lab, ApiError> {
        match (&self.hex, &self.rgb, &self.lab) {
            (Some(hex), None, None) => Ok(Lab::from(Rgb::from_hex(hex)?)),
            (None, Some(rgb), None) => Ok(Lab::from(Rgb::new(rgb.r, rgb.g, rgb.b))),
            (None, None, Some(lab)) => Ok(Lab::new(lab.l, lab.a, lab.b).validated()?),
            _ => Err(ApiError::BadRequest(
                "provide exactly one of hex, rgb or lab".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RgbDto {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb> for RgbDto {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabDto {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl From<Lab> for LabDto {
    fn from(lab: Lab) -> Self {
        Self {
            l: lab.l,
            a: lab.a,
            b: lab.b,
        }
    }
}

/// Hue in degrees, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct HslDto {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl From<Hsl> for HslDto {
    fn from(hsl: Hsl) -> Self {
        Self {
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
        }
    }
}

/// Ink coverage in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct CmykDto {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl From<Cmyk> for CmykDto {
    fn from(cmyk: Cmyk) -> Self {
        Self {
            c: cmyk.c,
            m: cmyk.m,
            y: cmyk.y,
            k: cmyk.k,
        }
    }
}

/// One color in every supported color space
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BreakdownDto {
    pub hex: String,
    pub rgb: RgbDto,
    pub hsl: HslDto,
    pub cmyk: CmykDto,
    pub lab: LabDto,
}

impl From<&ColorBreakdown> for BreakdownDto {
    fn from(breakdown: &ColorBreakdown) -> Self {
        Self {
            hex: breakdown.hex.clone(),
            rgb: breakdown.rgb.into(),
            hsl: breakdown.hsl.into(),
            cmyk: breakdown.cmyk.into(),
            lab: breakdown.lab.into(),
        }
    }
}

/// A reference color
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ColorEntryDto {
    pub name: String,
    pub hex: String,
    pub category: String,
    pub lab: LabDto,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pantone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ral: Option<String>,
}

impl From<&ColorDatabaseEntry> for ColorEntryDto {
    fn from(entry: &ColorDatabaseEntry) -> Self {
        Self {
            name: entry.name.clone(),
            hex: entry.hex.clone(),
            category: entry.category.clone(),
            lab: entry.lab.into(),
            alternate_names: entry.alternate_names.clone(),
            source: entry.source.clone(),
            pantone: entry.pantone.clone(),
            ncs: entry.ncs.clone(),
            ral: entry.ral.clone(),
        }
    }
}
