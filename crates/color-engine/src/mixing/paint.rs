//! Paints: reference entries viewed as mixable bases

use serde::{Deserialize, Serialize};

use crate::color::Lab;
use crate::database::ColorDatabaseEntry;

/// Fixed opacity of every paint.
pub const DEFAULT_OPACITY: f64 = 0.9;
/// Fixed mixability of every paint.
pub const DEFAULT_MIXABILITY: f64 = 0.85;
/// Fixed relative cost of every paint.
pub const DEFAULT_COST_FACTOR: f64 = 1.0;

/// A base paint derived 1:1 from a [`ColorDatabaseEntry`].
///
/// The coefficients are the same for every paint. Only `cost_factor` takes
/// part in the recipe (through the estimated cost); opacity and mixability
/// are informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// Lowercased name with whitespace runs replaced by `-`
    pub id: String,
    pub name: String,
    pub hex: String,
    pub lab: Lab,
    pub opacity: f64,
    pub mixability: f64,
    pub cost_factor: f64,
}

impl From<&ColorDatabaseEntry> for Paint {
    fn from(entry: &ColorDatabaseEntry) -> Self {
        Self {
            id: paint_id(&entry.name),
            name: entry.name.clone(),
            hex: entry.hex.clone(),
            lab: entry.lab,
            opacity: DEFAULT_OPACITY,
            mixability: DEFAULT_MIXABILITY,
            cost_factor: DEFAULT_COST_FACTOR,
        }
    }
}

/// Lowercase the name and replace every whitespace run with one `-`.
///
/// `"Payne's  Grey"` becomes `"payne's-grey"`. Edge whitespace is not
/// trimmed, so `" Sap Green"` becomes `"-sap-green"`.
fn paint_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else {
            id.extend(c.to_lowercase());
            in_space = false;
        }
    }
    id
}
