//! color-engine: color conversion, perceptual difference, naming and
//! paint-mix recipes
//!
//! This library turns a sampled device color into the things a person wants
//! to know about it: its values in common color spaces, a human-readable
//! name, and a recipe for mixing it from a small palette of base paints.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use color_engine::{ColorDatabase, ColorNamer, Lab, MixOptions, PaintMixOptimizer, Rgb};
//!
//! let db = Arc::new(ColorDatabase::from_json(r##"[
//!     {"name": "White", "lab": {"l": 100, "a": 0, "b": 0}, "hex": "#ffffff", "category": "neutral"},
//!     {"name": "Black", "lab": {"l": 0, "a": 0, "b": 0}, "hex": "#000000", "category": "neutral"}
//! ]"##).unwrap());
//!
//! let grey = Lab::from(Rgb::from_hex("#777777").unwrap());
//!
//! let namer = ColorNamer::new(db.clone());
//! let name = namer.name(grey).unwrap();
//!
//! let optimizer = PaintMixOptimizer::new(db);
//! let recipe = optimizer.mix(grey, &MixOptions::default()).unwrap();
//! assert_eq!(recipe.paints.len(), 2);
//! ```
//!
//! # Color Spaces
//!
//! | Type | Used For |
//! |------|----------|
//! | [`Rgb`] | Input: hex strings and sampled pixels (8-bit sRGB) |
//! | [`Lab`] | Everything perceptual: distance, naming, mixing |
//! | [`Hsl`], [`Cmyk`] | Display only |
//!
//! RGB to LAB goes through linear light and CIE XYZ with the D65 white
//! point. The sRGB decode step uses a 256-entry table generated by build.rs.
//! The inverse, [`Lab::to_rgb`], reproduces every 8-bit channel within ±1.
//!
//! # Color Difference
//!
//! [`delta_e_2000`] (CIEDE2000) is the only difference metric. Roughly:
//!
//! ```text
//! ΔE00 < 1     not perceptible
//! ΔE00 1-2     perceptible on close inspection
//! ΔE00 2-10    perceptible at a glance
//! ΔE00 > 1.5   a mix recipe is flagged for color correction
//! ```
//!
//! # Shared State
//!
//! [`ColorDatabase`] is immutable once built. Share it as
//! `Arc<ColorDatabase>` between a [`ColorNamer`] and a
//! [`PaintMixOptimizer`]; both are `Send + Sync` and every call is pure.
//! [`PaintMixOptimizer::mix_with_cancel`] takes a [`CancelFlag`] for callers
//! that need to abandon a search.

pub mod color;
pub mod database;
pub mod delta_e;
pub mod error;
pub mod mixing;
pub mod naming;


pub use color::{Cmyk, ColorBreakdown, Hsl, Lab, Rgb};
pub use database::{ColorDatabase, ColorDatabaseEntry, DatasetError};
pub use delta_e::{delta_e_2000, needs_color_correction, DeltaECategory, COLOR_CORRECTION_THRESHOLD};
pub use error::ColorError;
pub use mixing::{CancelFlag, MatchQuality, MixComponent, MixOptions, MixResult, Paint, PaintMixOptimizer};
pub use naming::{ColorDescription, ColorNamer, MatchKind};
