//! Project configuration
//!
//! A project is configured by `tokenwind.toml` (or `tokenwind.json`) at its
//! root:
//!
//! ```toml
//! plugins = []
//!
//! [content]
//! files = ["*.html", "./src/*.rs", "./src/**"]
//!
//! [theme.extend.height]
//! 128 = "36rem"
//!
//! [theme.extend.fontFamily]
//! h1 = ["MagicSchoolTwo"]
//! ```
//!
//! `base` may point at a theme file (relative to the config file) to use
//! instead of the built-in default table.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::core::models::{ContentConfig, RawLayer, ThemeConfig, ThemeLayer};
use crate::core::services::{Extractor, ThemeRegistry};
use crate::defaults;

/// File names tried by [`ProjectConfig::discover`], in order
pub const CONFIG_FILE_NAMES: &[&str] = &["tokenwind.toml", "tokenwind.json"];

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl Format {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn parse<T: for<'de> Deserialize<'de>>(self, content: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => Ok(toml::from_str(content)?),
            Self::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

/// A parsed project config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Which files to scan
    #[serde(default)]
    pub content: ContentConfig,

    /// Theme overrides and extensions
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Optional base theme file replacing the built-in defaults
    #[serde(default)]
    pub base: Option<PathBuf>,

    /// Plugin entries; accepted and ignored
    #[serde(default)]
    pub plugins: Vec<serde_json::Value>,

    /// Path the config was loaded from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl ProjectConfig {
    /// Parse a config from a string in the given format
    pub fn parse(content: &str, format: Format) -> Result<Self, ConfigError> {
        let config: Self = format.parse(content)?;
        if !config.plugins.is_empty() {
            warn!("{} plugin entries configured; plugins are ignored", config.plugins.len());
        }
        Ok(config)
    }

    /// Load a config file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = Format::from_path(path)?;
        let content = read(path)?;
        let mut config = Self::parse(&content, format)?;
        config.source = Some(path.to_path_buf());
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Find and load the config file in `dir`
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
            .map_or_else(|| Err(ConfigError::NotFound(dir.to_path_buf())), |path| Self::load(&path))
    }

    /// Directory the config was loaded from, if any
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.source
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    /// The base layer: the `base` file if set, else the built-in table
    pub fn base_layer(&self) -> Result<ThemeLayer, ConfigError> {
        let Some(base) = &self.base else {
            return defaults::default_base();
        };

        let path = match self.dir() {
            Some(dir) if base.is_relative() => dir.join(base),
            _ => base.clone(),
        };
        let format = Format::from_path(&path)?;
        let raw: RawLayer = format.parse(&read(&path)?)?;
        debug!("loaded base theme from {}", path.display());
        ThemeLayer::from_raw(&raw)
    }

    /// Build the theme registry for this config
    pub fn registry(&self) -> Result<ThemeRegistry, ConfigError> {
        ThemeRegistry::new(self.base_layer()?, self.theme.clone())
    }

    /// Build the candidate extractor for this config
    pub fn extractor(&self) -> Result<Extractor, ConfigError> {
        Ok(Extractor::from_pattern(self.content.extract.as_deref())?)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
