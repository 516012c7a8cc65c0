//! Asset loading with embedded fallbacks
//!
//! The reference dataset and the default config are compiled into the binary.
//! Each can be overridden from the filesystem:
//!
//! - If no external path is set: use the embedded asset only
//! - If an external path is set but the file does not exist: use the embedded asset
//! - If an external path is set and the file exists: use the file

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the embedded reference dataset inside `data/`.
pub const DATASET_FILE: &str = "colors.json";

/// Embedded reference datasets
#[derive(RustEmbed)]
#[folder = "data/"]
#[include = "*.json"]
struct EmbeddedData;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Where an asset was actually read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for AssetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetSource::Embedded => f.write_str("embedded"),
            AssetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
    /// External dataset path (from COLORS_FILE env var)
    colors_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used (unless the config names a dataset).
    pub fn new(config_file: Option<PathBuf>, colors_file: Option<PathBuf>) -> Self {
        Self {
            config_file,
            colors_file,
        }
    }

    /// Read the config file
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::debug!(path = %path.display(), "Config file not found, using embedded");
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Config not found"))
    }

    /// Read the config file as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Resolve which dataset file would be read.
    ///
    /// `COLORS_FILE` wins over the `dataset.path` config entry. A path that
    /// does not exist falls through to the embedded dataset.
    pub fn dataset_source(&self, configured: Option<&Path>) -> AssetSource {
        self.colors_file
            .as_deref()
            .into_iter()
            .chain(configured)
            .find(|path| path.exists())
            .map(|path| AssetSource::File(path.to_path_buf()))
            .unwrap_or(AssetSource::Embedded)
    }

    /// Read the reference dataset as a UTF-8 string, with the source it came from.
    pub fn read_dataset(&self, configured: Option<&Path>) -> io::Result<(String, AssetSource)> {
        let source = self.dataset_source(configured);
        let bytes = match &source {
            AssetSource::File(path) => {
                tracing::trace!(path = %path.display(), "Loading dataset from filesystem");
                Cow::Owned(fs::read(path)?)
            }
            AssetSource::Embedded => {
                tracing::trace!(file = DATASET_FILE, "Loading dataset from embedded assets");
                EmbeddedData::get(DATASET_FILE).map(|f| f.data).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("Dataset not found: {DATASET_FILE}"),
                    )
                })?
            }
        };

        let text = String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok((text, source))
    }

    /// External config path, if one was configured
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }
}
