use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use marginalia_engine::ColorSpec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// How encoded spans carry their color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncodeMethod {
    /// `class="hltr-<name>"` — colors come from a stylesheet.
    CssClasses,
    /// `style="background: <value>;"` — colors inlined per span.
    InlineStyles,
}

/// The highlight palette: named colors, their menu order, and the encoding
/// method used when applying a highlight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub method: EncodeMethod,
    /// Menu order of palette entries; every name must key into `colors`.
    pub order: Vec<String>,
    /// Name to CSS color value.
    pub colors: BTreeMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        let stock = [
            ("pink", "#FFB8EBA6"),
            ("red", "#FF5582A6"),
            ("orange", "#FFB86CA6"),
            ("yellow", "#FFF3A3A6"),
            ("green", "#BBFABBA6"),
            ("cyan", "#ABF7F7A6"),
            ("blue", "#ADCCFFA6"),
            ("purple", "#D2B3FFA6"),
            ("grey", "#CACFD9A6"),
        ];
        Self {
            method: EncodeMethod::InlineStyles,
            order: stock.iter().map(|(name, _)| name.to_string()).collect(),
            colors: stock
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl Palette {
    /// Resolves a palette entry to the [`ColorSpec`] the encoder should use,
    /// honoring the configured method. Unknown names resolve to `None`.
    pub fn color_spec(&self, name: &str) -> Option<ColorSpec> {
        let value = self.colors.get(name)?;
        Some(match self.method {
            EncodeMethod::CssClasses => ColorSpec::Named(name.to_string()),
            EncodeMethod::InlineStyles => ColorSpec::Value(value.clone()),
        })
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let palette: Palette =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(palette))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/marginalia");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}
