//! Engine - ties scanning and theme resolution together
//!
//! Drives a [`Scan`](super::scanner::Scan) to completion, parses each
//! candidate as a utility, and keeps the ones the theme can resolve.
//! Everything else is plain text and dropped without comment.

use std::collections::BTreeMap;
use std::path::PathBuf;

use log::info;
use serde::Serialize;

use super::scanner::Scanner;
use super::utility::{self, Resolution};
use crate::core::error::ScanError;
use crate::core::models::ResolvedTheme;
use crate::core::ports::FileSource;

/// A utility class found in content and resolved against the theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedUtility {
    /// Candidate text as found, e.g. `md:h-128`
    pub candidate: String,
    /// Variant prefixes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
    /// Marked `!`
    pub important: bool,
    /// Marked `-`
    pub negative: bool,
    /// The theme lookup that matched
    #[serde(flatten)]
    pub resolution: Resolution,
    /// First file the candidate was seen in
    pub file: PathBuf,
}

/// Outcome of one engine run
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Distinct resolved utilities, sorted by candidate text
    pub utilities: Vec<ResolvedUtility>,
    /// Non-fatal scan errors, in the order they occurred
    pub warnings: Vec<ScanError>,
    /// Files read successfully
    pub files_scanned: usize,
    /// Candidates seen, duplicates included
    pub candidates_seen: usize,
}

impl ScanReport {
    /// Look up a resolved utility by candidate text
    #[must_use]
    pub fn get(&self, candidate: &str) -> Option<&ResolvedUtility> {
        self.utilities
            .binary_search_by(|u| u.candidate.as_str().cmp(candidate))
            .ok()
            .map(|i| &self.utilities[i])
    }
}

/// Scan `patterns` and resolve every candidate against `theme`
pub fn run<S: FileSource>(
    theme: &ResolvedTheme,
    scanner: &Scanner<S>,
    patterns: &[String],
) -> ScanReport {
    let mut found: BTreeMap<String, Option<ResolvedUtility>> = BTreeMap::new();
    let mut warnings = Vec::new();
    let mut candidates_seen = 0;

    let mut scan = scanner.scan(patterns);
    for item in scan.by_ref() {
        let candidate = match item {
            Ok(candidate) => candidate,
            Err(err) => {
                warnings.push(err);
                continue;
            },
        };
        candidates_seen += 1;

        if found.contains_key(&candidate.text) {
            continue;
        }
        let resolved = utility::parse(&candidate.text).and_then(|parsed| {
            utility::lookup(theme, &parsed).map(|resolution| ResolvedUtility {
                candidate: candidate.text.clone(),
                variants: parsed.variants.iter().map(ToString::to_string).collect(),
                important: parsed.important,
                negative: parsed.negative,
                resolution,
                file: candidate.file.to_path_buf(),
            })
        });
        found.insert(candidate.text, resolved);
    }

    let report = ScanReport {
        utilities: found.into_values().flatten().collect(),
        warnings,
        files_scanned: scan.files_read(),
        candidates_seen,
    };

    info!(
        "scanned {} files: {} utilities resolved, {} warnings",
        report.files_scanned,
        report.utilities.len(),
        report.warnings.len()
    );
    report
}
