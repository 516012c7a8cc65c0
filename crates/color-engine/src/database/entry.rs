//! Reference color record

use serde::{Deserialize, Serialize};

use crate::color::{Lab, Rgb};
use crate::error::ColorError;

/// One named reference color, as stored in the dataset.
///
/// Only `name`, `lab`, `hex` and `category` are required. Standard codes and
/// alternate names are carried through for display and never used for
/// matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDatabaseEntry {
    pub name: String,
    pub lab: Lab,
    pub hex: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pantone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ral: Option<String>,
}

impl ColorDatabaseEntry {
    /// Minimal entry with no alternate names, source or codes.
    pub fn new(
        name: impl Into<String>,
        lab: Lab,
        hex: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lab,
            hex: hex.into(),
            category: category.into(),
            alternate_names: Vec::new(),
            source: None,
            pantone: None,
            ncs: None,
            ral: None,
        }
    }

    /// Entry whose LAB is derived from its hex value.
    ///
    /// Fails with [`ColorError::InvalidColorInput`] for a malformed hex string.
    pub fn from_hex(
        name: impl Into<String>,
        hex: &str,
        category: impl Into<String>,
    ) -> Result<Self, ColorError> {
        let rgb = Rgb::from_hex(hex)?;
        Ok(Self::new(name, Lab::from(rgb), rgb.to_hex(), category))
    }

    /// True if `name` matches the primary or any alternate name,
    /// ignoring ASCII case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self
                .alternate_names
                .iter()
                .any(|alt| alt.eq_ignore_ascii_case(name))
    }

    /// Validate the fields the engine depends on.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("empty name".into());
        }
        if let Err(e) = self.lab.validated() {
            return Err(format!("{e} for {:?}", self.name));
        }
        if Rgb::from_hex(&self.hex).is_err() {
            return Err(format!("invalid hex {:?} for {:?}", self.hex, self.name));
        }
        Ok(())
    }
}
