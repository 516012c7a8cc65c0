use crate::assets::AssetLoader;
use color_engine::MixOptions;
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Reference dataset location
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Default mixing options, overridable per request
    #[serde(default)]
    pub mixing: MixOptions,
}

/// Where to read the reference dataset from
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct DatasetConfig {
    /// External dataset file; `COLORS_FILE` takes precedence
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML, falling back to defaults on error
    pub fn parse(content: &str) -> Self {
        match serde_yaml::from_str::<Self>(content) {
            Ok(mut config) => {
                if config.mixing.validate().is_err() {
                    tracing::warn!(
                        max_paints = config.mixing.max_paints,
                        "Invalid mixing defaults, using max_paints = 4"
                    );
                    config.mixing.max_paints = MixOptions::default().max_paints;
                }
                tracing::info!(
                    dataset = ?config.dataset.path,
                    max_paints = config.mixing.max_paints,
                    prefer_cost_effective = config.mixing.prefer_cost_effective,
                    allow_color_correction = config.mixing.allow_color_correction,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::parse(
            r#"
dataset:
  path: /data/colors.json
mixing:
  max_paints: 2
  prefer_cost_effective: true
  allow_color_correction: false
"#,
        );
        assert_eq!(config.dataset.path, Some(PathBuf::from("/data/colors.json")));
        assert_eq!(config.mixing.max_paints, 2);
        assert!(config.mixing.prefer_cost_effective);
        assert!(!config.mixing.allow_color_correction);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config = AppConfig::parse("mixing:\n  max_paints: 3\n");
        assert_eq!(config.dataset.path, None);
        assert_eq!(config.mixing.max_paints, 3);
        assert!(config.mixing.allow_color_correction);
    }

    #[test]
    fn test_invalid_yaml_uses_defaults() {
        assert_eq!(AppConfig::parse("mixing: [unclosed"), AppConfig::default());
    }

    #[test]
    fn test_zero_max_paints_reset() {
        let config = AppConfig::parse("mixing:\n  max_paints: 0\n");
        assert_eq!(config.mixing.max_paints, 4);
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        let loader = AssetLoader::new(None, None);
        assert_eq!(AppConfig::load_from_assets(&loader), AppConfig::default());
    }
}
