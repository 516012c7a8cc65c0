//! Mix recipe output

use serde::{Deserialize, Serialize};

use super::paint::Paint;
use crate::color::Lab;

/// One paint of a recipe with its share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixComponent {
    pub paint: Paint,
    /// Share in percent, exact to one decimal, always > 0
    pub percentage: f64,
}

/// Qualitative rating of a recipe's ΔE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    /// ΔE < 1
    Excellent,
    /// ΔE < 2
    Good,
    /// ΔE < 3
    Fair,
    Approximate,
}

impl MatchQuality {
    pub fn from_delta_e(delta_e: f64) -> Self {
        if delta_e < 1.0 {
            Self::Excellent
        } else if delta_e < 2.0 {
            Self::Good
        } else if delta_e < 3.0 {
            Self::Fair
        } else {
            Self::Approximate
        }
    }
}

/// A computed paint-mixing recipe.
///
/// Percentages sum to 100 and are listed in candidate order (white anchor,
/// black anchor, then nearest paints), with zero shares dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixResult {
    pub paints: Vec<MixComponent>,
    /// CIEDE2000 between the target and `mixed_lab`
    pub delta_e: f64,
    /// Σ cost_factor × percentage / 100
    pub estimated_cost: f64,
    /// `delta_e` above the color-correction threshold
    pub requires_color_correction: bool,
    pub quality: MatchQuality,
    /// Percentage-weighted mean of the paints' LAB
    pub mixed_lab: Lab,
    /// Preview of `mixed_lab`
    pub mixed_hex: String,
}

impl MixResult {
    /// Sum of all percentages.
    pub fn total_percentage(&self) -> f64 {
        self.paints.iter().map(|c| c.percentage).sum()
    }
}
