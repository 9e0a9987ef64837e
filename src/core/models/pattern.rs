//! Content patterns: globs selecting which files get scanned
//!
//! Patterns are matched against paths relative to the scan root, so a
//! leading `./` is dropped and `\` is normalized to `/`.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use tokenwind::core::models::ContentPattern;
//!
//! let p = ContentPattern::parse("./src/*.rs").unwrap();
//! assert!(p.matches(Path::new("src/main.rs")));
//! assert!(!p.matches(Path::new("src/app/mod.rs")));
//! assert_eq!(p.base_dir(), Path::new("src"));
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::core::error::ScanError;

const RECURSIVE: &str = "**";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A validated glob pattern from `content.files`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPattern {
    /// Pattern as written in configuration
    raw: String,

    /// Compiled pattern over the normalized form
    glob: Pattern,
}

impl ContentPattern {
    /// Parse and compile a pattern
    ///
    /// Fails with [`ScanError::InvalidPattern`] on empty input or glob
    /// syntax errors such as an unclosed `[`.
    pub fn parse(raw: &str) -> Result<Self, ScanError> {
        let trimmed = raw.trim();
        let normalized = normalize(trimmed);

        if normalized.is_empty() {
            return Err(ScanError::InvalidPattern {
                pattern: raw.to_string(),
                reason: "empty pattern".to_string(),
            });
        }

        let glob = Pattern::new(&normalized).map_err(|e| ScanError::InvalidPattern {
            pattern: raw.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            raw: trimmed.to_string(),
            glob,
        })
    }

    /// The pattern as written
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized pattern used for matching
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.glob.as_str()
    }

    /// Longest leading directory with no glob metacharacters
    ///
    /// Only this directory needs walking: `src/**` -> `src`, `*.html` ->
    /// the root itself, and a literal `src/index.html` -> `src`.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        self.segments()[..self.base_len()].iter().collect()
    }

    /// How deep below [`base_dir`](Self::base_dir) a match can sit
    ///
    /// `None` when the pattern has a `**` segment: `*.html` -> `Some(1)`,
    /// `src/*/mod.rs` -> `Some(2)`, `src/**` -> `None`.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        let segments = self.segments();
        if segments.contains(&RECURSIVE) {
            return None;
        }
        Some(segments.len() - self.base_len())
    }

    /// Whether `relative` or something below it could match
    ///
    /// Each component is checked against the segment at the same position.
    /// Past a `**` segment anything goes.
    #[must_use]
    pub fn could_contain(&self, relative: &Path) -> bool {
        let segments = self.segments();
        for (i, component) in relative.components().enumerate() {
            let Some(&segment) = segments.get(i) else {
                return false;
            };
            if segment == RECURSIVE {
                return true;
            }
            let Some(name) = component.as_os_str().to_str() else {
                return true;
            };
            let fits = Pattern::new(segment)
                .ok()
                .is_none_or(|p| p.matches_with(name, MATCH_OPTIONS));
            if !fits {
                return false;
            }
        }
        true
    }

    /// Check a path relative to the scan root
    #[must_use]
    pub fn matches(&self, relative: &Path) -> bool {
        self.glob.matches_path_with(relative, MATCH_OPTIONS)
    }
}

impl ContentPattern {
    fn segments(&self) -> Vec<&str> {
        self.as_str().split('/').collect()
    }

    fn base_len(&self) -> usize {
        let segments = self.segments();
        let literal = segments.iter().take_while(|s| !is_glob_segment(s)).count();
        // A fully literal pattern names a file; walk its parent
        if literal == segments.len() {
            literal.saturating_sub(1)
        } else {
            literal
        }
    }
}

impl fmt::Display for ContentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn normalize(pattern: &str) -> String {
    let mut normalized = pattern.replace('\\', "/");
    while let Some(rest) = normalized.strip_prefix("./") {
        normalized = rest.to_string();
    }
    normalized
}

fn is_glob_segment(segment: &str) -> bool {
    segment.contains(['*', '?', '['])
}
