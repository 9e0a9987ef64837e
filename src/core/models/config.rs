//! Configuration shapes consumed by the engine
//!
//! These mirror the `content` and `theme` sections of a project config
//! file. Theme sections stay untyped ([`RawLayer`], or a bare [`Value`]
//! for `extend`) until they are validated by the theme loader, so a
//! malformed override surfaces as `ConfigError::InvalidShape` rather than a
//! generic parse error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::token::RawLayer;

/// The `theme` section
///
/// ```toml
/// [theme.extend.height]
/// 128 = "36rem"
///
/// # Outside `extend`: replaces the whole base namespace
/// [theme.zIndex]
/// modal = "50"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Additive overlay: entries are unioned with the base namespace
    ///
    /// Expected to be a table of namespaces; anything else is rejected when
    /// the theme is loaded.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub extend: Value,

    /// Full-namespace replacements
    #[serde(flatten)]
    pub overrides: RawLayer,
}

impl ThemeConfig {
    /// Whether the section declares nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let no_extend = match &self.extend {
            Value::Null => true,
            Value::Object(namespaces) => namespaces.is_empty(),
            _ => false,
        };
        no_extend && self.overrides.is_empty()
    }
}

/// The `content` section
///
/// Accepts either a table or a bare list of patterns:
///
/// ```toml
/// content = ["*.html", "./src/**"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawContent")]
pub struct ContentConfig {
    /// Glob patterns, relative to the scan root
    pub files: Vec<String>,

    /// Optional regex replacing the default delimiter-based extraction
    pub extract: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawContent {
    Files(Vec<String>),
    Table {
        #[serde(default)]
        files: Vec<String>,
        #[serde(default)]
        extract: Option<String>,
    },
}

impl From<RawContent> for ContentConfig {
    fn from(raw: RawContent) -> Self {
        match raw {
            RawContent::Files(files) => Self {
                files,
                extract: None,
            },
            RawContent::Table { files, extract } => Self { files, extract },
        }
    }
}
