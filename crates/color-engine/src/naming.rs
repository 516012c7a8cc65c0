//! Human-readable color names
//!
//! [`ColorNamer`] maps a LAB color to a display name against a
//! [`ColorDatabase`]. Every entry is scored with a weighted perceptual
//! difference that combines CIEDE2000 with absolute lightness, chroma and hue
//! gaps:
//!
//! ```text
//! d = (1.8·ΔE00 + 2.0·|ΔL| + 1.5·|ΔC| + 1.2·|Δh|/π) / 4
//! ```
//!
//! where `h = atan2(b, a)` in radians (not wrapped). The best and second best
//! scores then pick one of three outcomes, in order:
//!
//! 1. **Exact**: the best entry is within ΔE00 < 2.0; its name is returned as is.
//! 2. **Blend**: the two best scores are within 5 units and each carries more
//!    than 30% of the inverse-distance weight; `"<best>-<second> Blend"`.
//! 3. **Nearest**: the best entry's name, prefixed with lightness and
//!    saturation modifiers such as `"Very Light Muted Sage"`.

use std::f64::consts::PI;
use std::sync::Arc;

use serde::Serialize;

use crate::color::Lab;
use crate::database::{ColorDatabase, ColorDatabaseEntry};
use crate::delta_e::delta_e_2000;
use crate::error::ColorError;

/// ΔE00 below which the best entry's name is used unmodified.
const EXACT_MATCH_DELTA_E: f64 = 2.0;

/// Maximum score gap between the two best entries for a blend name.
const BLEND_SCORE_GAP: f64 = 5.0;

/// Minimum share each side of a blend must carry.
const BLEND_MIN_WEIGHT: f64 = 0.3;

/// How a [`ColorDescription`] name was formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Blend,
    Nearest,
}

/// A name together with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorDescription {
    /// Display name
    pub name: String,
    pub kind: MatchKind,
    /// Best-scoring reference entry
    pub matched: ColorDatabaseEntry,
    /// Runner-up entry, absent for a single-entry database
    pub second: Option<ColorDatabaseEntry>,
    /// CIEDE2000 distance from the target to `matched`
    pub delta_e: f64,
    /// Weighted ranking score of `matched`
    pub score: f64,
    /// Modifiers prepended to the name (empty unless `kind` is `Nearest`)
    pub modifiers: Vec<&'static str>,
}

/// Names colors against a shared reference table.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use color_engine::{ColorDatabase, ColorDatabaseEntry, ColorNamer, Lab, Rgb};
///
/// let entries = vec![
///     ColorDatabaseEntry::from_hex("Red", "#ff0000", "red").unwrap(),
///     ColorDatabaseEntry::from_hex("Blue", "#0000ff", "blue").unwrap(),
/// ];
/// let namer = ColorNamer::new(Arc::new(ColorDatabase::new(entries).unwrap()));
///
/// let name = namer.name(Lab::from(Rgb::new(254, 1, 0))).unwrap();
/// assert_eq!(name, "Red");
/// ```
#[derive(Debug, Clone)]
pub struct ColorNamer {
    database: Arc<ColorDatabase>,
}

/// Best and runner-up entries with their weighted scores.
struct Ranking<'a> {
    best: (&'a ColorDatabaseEntry, f64),
    second: Option<(&'a ColorDatabaseEntry, f64)>,
}

impl ColorNamer {
    pub fn new(database: Arc<ColorDatabase>) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &ColorDatabase {
        &self.database
    }

    /// Display name for `target`.
    ///
    /// # Errors
    ///
    /// - [`ColorError::InvalidColorInput`] for a non-finite target
    /// - [`ColorError::NoReferenceData`] for an empty database
    pub fn name(&self, target: Lab) -> Result<String, ColorError> {
        Ok(self.describe(target)?.name)
    }

    /// Entry with the best weighted score for `target`.
    pub fn closest_entry(&self, target: Lab) -> Result<&ColorDatabaseEntry, ColorError> {
        Ok(self.rank(target)?.best.0)
    }

    /// Name plus the matched entries, distance and modifiers.
    pub fn describe(&self, target: Lab) -> Result<ColorDescription, ColorError> {
        let Ranking { best, second } = self.rank(target)?;
        let (matched, best_score) = best;
        let delta_e = delta_e_2000(target, matched.lab);

        let (name, kind, modifiers) = if delta_e < EXACT_MATCH_DELTA_E {
            (matched.name.clone(), MatchKind::Exact, Vec::new())
        } else if let Some(blend) = second.and_then(|runner_up| blend_name(best, runner_up)) {
            (blend, MatchKind::Blend, Vec::new())
        } else {
            let modifiers = modifiers_for(target, matched.lab);
            let name = if modifiers.is_empty() {
                matched.name.clone()
            } else {
                format!("{} {}", modifiers.join(" "), matched.name)
            };
            (name, MatchKind::Nearest, modifiers)
        };

        Ok(ColorDescription {
            name,
            kind,
            matched: matched.clone(),
            second: second.map(|(entry, _)| entry.clone()),
            delta_e,
            score: best_score,
            modifiers,
        })
    }

    /// One pass over the table keeping the two best scores.
    /// Strict `<` keeps the earlier entry on ties.
    fn rank(&self, target: Lab) -> Result<Ranking<'_>, ColorError> {
        let target = target.validated()?;
        self.database.ensure_non_empty()?;

        let mut best: Option<(&ColorDatabaseEntry, f64)> = None;
        let mut second: Option<(&ColorDatabaseEntry, f64)> = None;

        for entry in self.database.iter() {
            let score = weighted_difference(target, entry.lab);
            match best {
                Some((_, best_score)) if score >= best_score => {
                    if second.map_or(true, |(_, s)| score < s) {
                        second = Some((entry, score));
                    }
                }
                _ => {
                    second = best;
                    best = Some((entry, score));
                }
            }
        }

        let best = best.ok_or(ColorError::NoReferenceData)?;
        Ok(Ranking { best, second })
    }
}

/// Weighted perceptual difference used for ranking.
pub fn weighted_difference(target: Lab, reference: Lab) -> f64 {
    let de = delta_e_2000(target, reference);
    let dl = (target.l - reference.l).abs();
    let dc = (target.chroma() - reference.chroma()).abs();
    let dh = (target.hue_radians() - reference.hue_radians()).abs() / PI;

    (1.8 * de + 2.0 * dl + 1.5 * dc + 1.2 * dh) / 4.0
}

fn blend_name(
    (best, d1): (&ColorDatabaseEntry, f64),
    (second, d2): (&ColorDatabaseEntry, f64),
) -> Option<String> {
    let total = d1 + d2;
    if (d1 - d2).abs() >= BLEND_SCORE_GAP || total <= 0.0 {
        return None;
    }

    let w1 = d2 / total;
    let w2 = d1 / total;
    (w1 > BLEND_MIN_WEIGHT && w2 > BLEND_MIN_WEIGHT)
        .then(|| format!("{}-{} Blend", best.name, second.name))
}

/// Lightness modifier first, then saturation. A zero-chroma reference has no
/// saturation to compare against and gets no saturation modifier.
fn modifiers_for(target: Lab, reference: Lab) -> Vec<&'static str> {
    let mut modifiers = Vec::with_capacity(2);

    let dl = target.l - reference.l;
    if dl >= 20.0 {
        modifiers.push("Very Light");
    } else if dl >= 10.0 {
        modifiers.push("Light");
    } else if dl <= -20.0 {
        modifiers.push("Very Dark");
    } else if dl <= -10.0 {
        modifiers.push("Dark");
    }

    let reference_chroma = reference.chroma();
    if reference_chroma > 0.0 {
        let ratio = target.chroma() / reference_chroma;
        if ratio >= 1.3 {
            modifiers.push("Vivid");
        } else if ratio >= 1.15 {
            modifiers.push("Bright");
        } else if ratio <= 0.7 {
            modifiers.push("Dull");
        } else if ratio <= 0.85 {
            modifiers.push("Muted");
        }
    }

    modifiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use pretty_assertions::assert_eq;

    fn namer(entries: &[(&str, Lab)]) -> ColorNamer {
        let entries = entries
            .iter()
            .map(|&(name, lab)| ColorDatabaseEntry::new(name, lab, lab.to_rgb().to_hex(), "test"))
            .collect();
        ColorNamer::new(Arc::new(ColorDatabase::new(entries).unwrap()))
    }

    fn primaries() -> ColorNamer {
        namer(&[
            ("Red", Lab::from(Rgb::new(255, 0, 0))),
            ("Blue", Lab::from(Rgb::new(0, 0, 255))),
            ("Green", Lab::from(Rgb::new(0, 255, 0))),
        ])
    }

    #[test]
    fn test_entry_lab_names_itself() {
        let namer = primaries();
        for entry in namer.database().iter() {
            let description = namer.describe(entry.lab).unwrap();
            assert_eq!(description.name, entry.name);
            assert_eq!(description.kind, MatchKind::Exact);
            assert_eq!(description.delta_e, 0.0);
        }
    }

    #[test]
    fn test_runner_up_is_tracked() {
        let description = primaries().describe(Lab::from(Rgb::new(255, 0, 0))).unwrap();
        assert_eq!(description.matched.name, "Red");
        assert_eq!(description.second.map(|e| e.name), Some("Blue".to_string()));
    }

    #[test]
    fn test_equidistant_neighbours_blend() {
        let namer = namer(&[
            ("Shadow", Lab::new(40.0, 0.0, 0.0)),
            ("Mist", Lab::new(60.0, 0.0, 0.0)),
        ]);
        let description = namer.describe(Lab::new(50.0, 0.0, 0.0)).unwrap();
        assert_eq!(description.kind, MatchKind::Blend);
        // Equal scores keep the earlier entry as best
        assert_eq!(description.name, "Shadow-Mist Blend");
        assert!(description.delta_e >= 2.0);
    }

    #[test]
    fn test_single_entry_never_blends() {
        let namer = namer(&[("Grey", Lab::new(50.0, 0.0, 0.0))]);
        let description = namer.describe(Lab::new(80.0, 0.0, 0.0)).unwrap();
        assert_eq!(description.kind, MatchKind::Nearest);
        assert_eq!(description.second, None);
        // Zero-chroma reference skips saturation modifiers
        assert_eq!(description.name, "Very Light Grey");
    }

    #[test]
    fn test_distant_runner_up_does_not_blend() {
        let namer = namer(&[
            ("Grey", Lab::new(50.0, 0.0, 0.0)),
            ("Red", Lab::from(Rgb::new(255, 0, 0))),
        ]);
        assert_eq!(namer.name(Lab::new(75.0, 0.0, 0.0)).unwrap(), "Very Light Grey");
    }

    #[test]
    fn test_closest_entry_matches_describe() {
        let namer = primaries();
        let target = Lab::from(Rgb::new(40, 40, 200));
        assert_eq!(
            namer.closest_entry(target).unwrap().name,
            namer.describe(target).unwrap().matched.name
        );
    }

    #[test]
    fn test_errors() {
        let empty = ColorNamer::new(Arc::new(ColorDatabase::default()));
        assert_eq!(
            empty.name(Lab::new(50.0, 0.0, 0.0)),
            Err(ColorError::NoReferenceData)
        );
        assert!(matches!(
            primaries().name(Lab::new(50.0, f64::NAN, 0.0)),
            Err(ColorError::InvalidColorInput(_))
        ));
    }

    #[test]
    fn test_modifier_thresholds() {
        let reference = Lab::new(50.0, 20.0, 0.0);
        assert_eq!(modifiers_for(Lab::new(60.0, 30.0, 0.0), reference), vec!["Light", "Vivid"]);
        assert_eq!(modifiers_for(Lab::new(30.0, 13.0, 0.0), reference), vec!["Very Dark", "Dull"]);
        assert_eq!(modifiers_for(Lab::new(41.0, 17.0, 0.0), reference), vec!["Muted"]);
        assert_eq!(modifiers_for(Lab::new(39.0, 23.0, 0.0), reference), vec!["Dark", "Bright"]);
        assert!(modifiers_for(Lab::new(55.0, 20.0, 0.0), reference).is_empty());
    }

    #[test]
    fn test_blend_weights() {
        let a = ColorDatabaseEntry::new("A", Lab::new(0.0, 0.0, 0.0), "#000000", "test");
        let b = ColorDatabaseEntry::new("B", Lab::new(0.0, 0.0, 0.0), "#000000", "test");
        assert_eq!(blend_name((&a, 10.0), (&b, 12.0)), Some("A-B Blend".to_string()));
        // Within 5 units but the runner-up would carry less than 30%
        assert_eq!(blend_name((&a, 1.0), (&b, 5.5)), None);
        assert_eq!(blend_name((&a, 10.0), (&b, 15.0)), None);
        assert_eq!(blend_name((&a, 0.0), (&b, 0.0)), None);
    }

    #[test]
    fn test_weighted_difference_of_identical_colors_is_zero() {
        let lab = Lab::new(42.0, -12.0, 33.0);
        assert_eq!(weighted_difference(lab, lab), 0.0);
    }
}
