//! Error taxonomy for theme loading and content scanning
//!
//! [`ConfigError`] is fatal for the load step: a malformed theme or config
//! file aborts startup. [`ScanError`] is always scoped to one file or one
//! pattern and never stops the rest of a scan.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading configuration or building a theme
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A theme namespace or entry does not have the expected shape
    #[error("invalid shape in theme namespace `{namespace}`: {reason}")]
    InvalidShape {
        /// Namespace holding the offending value
        namespace: String,
        /// What was wrong with it
        reason: String,
    },

    /// Config or theme file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// TOML syntax or structure error
    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or structure error
    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Custom extractor pattern did not compile
    #[error("invalid content extractor: {0}")]
    InvalidExtractor(#[from] regex::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("unsupported config format: {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// No config file found during discovery
    #[error("no tokenwind.toml or tokenwind.json found in {}", .0.display())]
    NotFound(PathBuf),
}

impl ConfigError {
    /// Build an [`InvalidShape`](Self::InvalidShape) error
    pub fn invalid_shape(namespace: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            namespace: namespace.into(),
            reason: reason.into(),
        }
    }
}

/// Non-fatal errors produced while scanning content
#[derive(Debug, Error)]
pub enum ScanError {
    /// A matched file (or directory on the way to it) could not be read
    #[error("unreadable file {}: {source}", .path.display())]
    UnreadableFile {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A content pattern is not a valid glob
    #[error("invalid content pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern as written in configuration
        pattern: String,
        /// Why it was rejected
        reason: String,
    },
}

impl ScanError {
    /// Path of the unreadable file, if this error concerns one
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::UnreadableFile { path, .. } => Some(path),
            Self::InvalidPattern { .. } => None,
        }
    }

    /// Whether this error is an unreadable file
    #[must_use]
    pub const fn is_unreadable_file(&self) -> bool {
        matches!(self, Self::UnreadableFile { .. })
    }

    /// Whether this error is an invalid pattern
    #[must_use]
    pub const fn is_invalid_pattern(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. })
    }
}
