//! Immutable reference color table

use std::collections::BTreeSet;

use serde::Deserialize;

use super::entry::ColorDatabaseEntry;
use super::error::DatasetError;
use crate::color::Lab;
use crate::delta_e::delta_e_2000;
use crate::error::ColorError;

/// Accepted dataset document shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Wrapped { colors: Vec<ColorDatabaseEntry> },
    Bare(Vec<ColorDatabaseEntry>),
}

/// Read-only table of reference colors.
///
/// Built once from a dataset and then shared (typically as
/// `Arc<ColorDatabase>`) by [`ColorNamer`](crate::ColorNamer) and
/// [`PaintMixOptimizer`](crate::PaintMixOptimizer). Entries keep dataset order;
/// anchor selection and tie-breaking depend on it.
///
/// An empty database can be built so that callers can report
/// [`ColorError::NoReferenceData`] at the point of use.
///
/// # Example
///
/// ```
/// use color_engine::ColorDatabase;
///
/// let db = ColorDatabase::from_json(r##"{"colors": [
///     {"name": "White", "lab": {"l": 100, "a": 0, "b": 0}, "hex": "#ffffff", "category": "neutral"}
/// ]}"##).unwrap();
///
/// assert_eq!(db.len(), 1);
/// assert!(db.find_by_name("white").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorDatabase {
    entries: Vec<ColorDatabaseEntry>,
}

impl ColorDatabase {
    /// Build a database from already parsed entries.
    ///
    /// # Errors
    ///
    /// [`DatasetError::InvalidEntry`] if any entry has an empty name,
    /// non-finite LAB or malformed hex.
    pub fn new(entries: Vec<ColorDatabaseEntry>) -> Result<Self, DatasetError> {
        for (index, entry) in entries.iter().enumerate() {
            entry
                .check()
                .map_err(|reason| DatasetError::InvalidEntry { index, reason })?;
        }
        Ok(Self { entries })
    }

    /// Parse a dataset document, either `{"colors": [...]}` or a bare array.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let entries = match serde_json::from_str::<Document>(json)? {
            Document::Wrapped { colors } => colors,
            Document::Bare(colors) => colors,
        };
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in dataset order.
    pub fn entries(&self) -> &[ColorDatabaseEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorDatabaseEntry> {
        self.entries.iter()
    }

    /// First entry whose primary or alternate name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&ColorDatabaseEntry> {
        let name = name.trim();
        self.entries.iter().find(|entry| entry.is_named(name))
    }

    /// Entries of one category (case-insensitive), in dataset order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ColorDatabaseEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.category.eq_ignore_ascii_case(category))
    }

    /// Distinct category names, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Fail with [`ColorError::NoReferenceData`] if the table is empty.
    pub fn ensure_non_empty(&self) -> Result<(), ColorError> {
        if self.entries.is_empty() {
            Err(ColorError::NoReferenceData)
        } else {
            Ok(())
        }
    }

    /// Entry with the smallest CIEDE2000 distance to `lab`, with that distance.
    ///
    /// Ties go to the earlier entry.
    pub fn nearest(&self, lab: Lab) -> Result<(&ColorDatabaseEntry, f64), ColorError> {
        let lab = lab.validated()?;
        self.ensure_non_empty()?;

        let mut best: Option<(&ColorDatabaseEntry, f64)> = None;
        for entry in &self.entries {
            let de = delta_e_2000(lab, entry.lab);
            if best.map_or(true, |(_, best_de)| de < best_de) {
                best = Some((entry, de));
            }
        }
        best.ok_or(ColorError::NoReferenceData)
    }
}

impl<'a> IntoIterator for &'a ColorDatabase {
    type Item = &'a ColorDatabaseEntry;
    type IntoIter = std::slice::Iter<'a, ColorDatabaseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use pretty_assertions::assert_eq;

    fn sample() -> ColorDatabase {
        let entries = [
            ("White", "#ffffff", "neutral"),
            ("Black", "#000000", "neutral"),
            ("Red", "#ff0000", "red"),
            ("Blue", "#0000ff", "blue"),
        ]
        .into_iter()
        .map(|(name, hex, category)| ColorDatabaseEntry::from_hex(name, hex, category).unwrap())
        .collect();
        ColorDatabase::new(entries).unwrap()
    }

    #[test]
    fn test_from_json_accepts_both_shapes() {
        let record = r##"{"name": "Red", "lab": {"l": 53.24, "a": 80.09, "b": 67.2}, "hex": "#ff0000", "category": "red"}"##;
        let wrapped = ColorDatabase::from_json(&format!(r#"{{"colors": [{record}]}}"#)).unwrap();
        let bare = ColorDatabase::from_json(&format!("[{record}]")).unwrap();
        assert_eq!(wrapped.entries(), bare.entries());
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        assert!(matches!(
            ColorDatabase::from_json(r#"{"colours": []}"#),
            Err(DatasetError::Json(_))
        ));
        assert!(matches!(ColorDatabase::from_json("not json"), Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_new_reports_index_of_bad_entry() {
        let mut entries = sample().entries().to_vec();
        entries[2].hex = "#12345".into();
        match ColorDatabase::new(entries) {
            Err(DatasetError::InvalidEntry { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected InvalidEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_database_is_constructible_but_unusable() {
        let db = ColorDatabase::from_json(r#"{"colors": []}"#).unwrap();
        assert!(db.is_empty());
        assert_eq!(db.ensure_non_empty(), Err(ColorError::NoReferenceData));
        assert_eq!(
            db.nearest(Lab::new(50.0, 0.0, 0.0)).unwrap_err(),
            ColorError::NoReferenceData
        );
    }

    #[test]
    fn test_lookup_by_name_and_category() {
        let db = sample();
        assert_eq!(db.find_by_name(" red ").unwrap().hex, "#ff0000");
        assert!(db.find_by_name("Green").is_none());
        let neutrals: Vec<_> = db.by_category("NEUTRAL").map(|e| e.name.as_str()).collect();
        assert_eq!(neutrals, vec!["White", "Black"]);
        assert_eq!(db.categories(), vec!["blue", "neutral", "red"]);
    }

    #[test]
    fn test_nearest_finds_exact_entry() {
        let db = sample();
        let (entry, de) = db.nearest(Lab::from(Rgb::new(0, 0, 255))).unwrap();
        assert_eq!(entry.name, "Blue");
        assert!(de < 1e-9);
    }

    #[test]
    fn test_nearest_rejects_nan() {
        let db = sample();
        assert!(matches!(
            db.nearest(Lab::new(f64::NAN, 0.0, 0.0)),
            Err(ColorError::InvalidColorInput(_))
        ));
    }
}
