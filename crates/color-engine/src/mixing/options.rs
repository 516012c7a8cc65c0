//! Mixing options

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Number of grid slots; a `max_paints` at or above this is unrestricted.
pub const GRID_SLOTS: usize = 4;

/// Options for [`PaintMixOptimizer::mix`](super::PaintMixOptimizer::mix).
///
/// # Defaults
///
/// - `max_paints`: 4 (no restriction)
/// - `prefer_cost_effective`: false
/// - `allow_color_correction`: true
///
/// # Example
///
/// ```
/// use color_engine::MixOptions;
///
/// let options = MixOptions::new()
///     .max_paints(2)
///     .allow_color_correction(false);
/// assert_eq!(options.max_paints, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixOptions {
    /// Maximum number of paints with a non-zero share. Must be at least 1.
    pub max_paints: usize,

    /// Among recipes with exactly equal ΔE, prefer fewer paints and then the
    /// lower estimated cost.
    pub prefer_cost_effective: bool,

    /// Refine the grid result by coordinate descent when its ΔE is above the
    /// color-correction threshold.
    pub allow_color_correction: bool,
}

impl Default for MixOptions {
    fn default() -> Self {
        Self {
            max_paints: GRID_SLOTS,
            prefer_cost_effective: false,
            allow_color_correction: true,
        }
    }
}

impl MixOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn max_paints(mut self, max: usize) -> Self {
        self.max_paints = max;
        self
    }

    #[inline]
    pub fn prefer_cost_effective(mut self, enabled: bool) -> Self {
        self.prefer_cost_effective = enabled;
        self
    }

    #[inline]
    pub fn allow_color_correction(mut self, enabled: bool) -> Self {
        self.allow_color_correction = enabled;
        self
    }

    /// Reject option values outside their range.
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.max_paints == 0 {
            return Err(ColorError::InvalidMixOptions(
                "max_paints must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// `max_paints` capped to the number of grid slots.
    #[inline]
    pub(crate) fn paint_limit(&self) -> usize {
        self.max_paints.min(GRID_SLOTS)
    }
}
