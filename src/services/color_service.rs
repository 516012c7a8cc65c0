//! Color service: the shared, loaded-once engine behind the API and the CLI.

use color_engine::{
    delta_e_2000, needs_color_correction, CancelFlag, ColorBreakdown, ColorDatabase,
    ColorDatabaseEntry, ColorDescription, ColorError, ColorNamer, DatasetError, DeltaECategory,
    Lab, MixOptions, MixResult, PaintMixOptimizer, Rgb,
};
use std::io;
use std::sync::Arc;
use thiserror::Error;

use crate::assets::{AssetLoader, AssetSource};
use crate::models::AppConfig;

/// Failure to bring up the color service
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid dataset: {0}")]
    Dataset(#[from] DatasetError),
}

/// Per-request overrides of the configured mixing defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MixOverrides {
    pub max_paints: Option<usize>,
    pub prefer_cost_effective: Option<bool>,
    pub allow_color_correction: Option<bool>,
}

/// Everything the display side needs for one sampled color
#[derive(Debug, Clone)]
pub struct Analysis {
    pub breakdown: ColorBreakdown,
    pub description: ColorDescription,
    pub share_text: String,
}

/// Perceptual difference between two colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaEReport {
    pub delta_e: f64,
    pub category: DeltaECategory,
    pub requires_color_correction: bool,
}

/// Owns the reference table and the engines built on it.
pub struct ColorService {
    database: Arc<ColorDatabase>,
    namer: ColorNamer,
    optimizer: PaintMixOptimizer,
    mix_defaults: MixOptions,
    source: AssetSource,
}

impl ColorService {
    /// Build the service around an already loaded database
    pub fn new(database: ColorDatabase, mix_defaults: MixOptions, source: AssetSource) -> Self {
        let database = Arc::new(database);
        Self {
            namer: ColorNamer::new(database.clone()),
            optimizer: PaintMixOptimizer::new(database.clone()),
            database,
            mix_defaults,
            source,
        }
    }

    /// Load the dataset named by the config (or the embedded one)
    pub fn from_assets(loader: &AssetLoader, config: &AppConfig) -> Result<Self, LoadError> {
        let (json, source) = loader.read_dataset(config.dataset.path.as_deref())?;
        let database = ColorDatabase::from_json(&json)?;

        tracing::info!(
            entries = database.len(),
            categories = database.categories().len(),
            source = %source,
            "Loaded color database"
        );
        if database.is_empty() {
            tracing::warn!("Color database is empty, naming and mixing will fail");
        }

        Ok(Self::new(database, config.mixing, source))
    }

    pub fn database(&self) -> &ColorDatabase {
        &self.database
    }

    pub fn source(&self) -> &AssetSource {
        &self.source
    }

    pub fn mix_defaults(&self) -> MixOptions {
        self.mix_defaults
    }

    /// Name a sampled color and break it down into every color space
    pub fn analyze(&self, rgb: Rgb) -> Result<Analysis, ColorError> {
        let breakdown = ColorBreakdown::from_rgb(rgb);
        let description = self.namer.describe(breakdown.lab)?;
        let share_text = breakdown.share_text(&description.name);

        tracing::debug!(
            hex = %breakdown.hex,
            name = %description.name,
            delta_e = description.delta_e,
            "Analyzed color"
        );

        Ok(Analysis {
            breakdown,
            description,
            share_text,
        })
    }

    /// Configured defaults with the request's overrides applied
    pub fn mix_options(&self, overrides: MixOverrides) -> MixOptions {
        let mut options = self.mix_defaults;
        if let Some(max) = overrides.max_paints {
            options = options.max_paints(max);
        }
        if let Some(enabled) = overrides.prefer_cost_effective {
            options = options.prefer_cost_effective(enabled);
        }
        if let Some(enabled) = overrides.allow_color_correction {
            options = options.allow_color_correction(enabled);
        }
        options
    }

    pub fn mix(&self, target: Lab, overrides: MixOverrides) -> Result<MixResult, ColorError> {
        self.mix_with_cancel(target, overrides, &CancelFlag::new())
    }

    /// Compute a recipe, giving up once `cancel` is set
    pub fn mix_with_cancel(
        &self,
        target: Lab,
        overrides: MixOverrides,
        cancel: &CancelFlag,
    ) -> Result<MixResult, ColorError> {
        let options = self.mix_options(overrides);
        let result = self.optimizer.mix_with_cancel(target, &options, cancel)?;

        tracing::debug!(
            paints = result.paints.len(),
            delta_e = result.delta_e,
            quality = ?result.quality,
            "Computed mix recipe"
        );
        Ok(result)
    }

    /// CIEDE2000 between two colors, with its perceptual category
    pub fn delta_e(&self, a: Lab, b: Lab) -> Result<DeltaEReport, ColorError> {
        let delta_e = delta_e_2000(a.validated()?, b.validated()?);
        Ok(DeltaEReport {
            delta_e,
            category: DeltaECategory::from_delta_e(delta_e),
            requires_color_correction: needs_color_correction(delta_e),
        })
    }

    /// Reference entries, optionally restricted to one category
    pub fn colors<'a>(&'a self, category: Option<&'a str>) -> Vec<&'a ColorDatabaseEntry> {
        match category {
            Some(category) => self.database.by_category(category).collect(),
            None => self.database.iter().collect(),
        }
    }
}
