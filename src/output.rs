//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::TokenValue;
use crate::core::services::{ResolvedUtility, ScanReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a scan
#[derive(Debug, Serialize)]
pub struct ScanResult {
    /// Number of files read
    pub files_scanned: usize,
    /// Number of candidates seen, duplicates included
    pub candidates_seen: usize,
    /// Resolved utilities
    pub utilities: Vec<ResolvedUtility>,
    /// Scan errors, as messages
    pub warnings: Vec<String>,
}

impl From<ScanReport> for ScanResult {
    fn from(report: ScanReport) -> Self {
        Self {
            files_scanned: report.files_scanned,
            candidates_seen: report.candidates_seen,
            utilities: report.utilities,
            warnings: report.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Result of a single token lookup
#[derive(Debug, Serialize)]
pub struct ResolveResult {
    /// Namespace looked up
    pub namespace: String,
    /// Key looked up
    pub key: String,
    /// The value, if found
    pub value: Option<TokenValue>,
}

/// Namespaces available after the merge
#[derive(Debug, Serialize)]
pub struct NamespacesResult {
    /// Namespace name and entry count, sorted by name
    pub namespaces: Vec<NamespaceInfo>,
}

/// One namespace in a [`NamespacesResult`]
#[derive(Debug, Serialize)]
pub struct NamespaceInfo {
    /// Namespace name
    pub name: String,
    /// Number of entries
    pub entries: usize,
}

impl ScanResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!(
            "Scanned {} file(s), {} candidate(s)\n",
            self.files_scanned, self.candidates_seen
        );

        if self.utilities.is_empty() {
            println!("No utilities resolved.");
        } else {
            println!("Utilities:");
            for u in &self.utilities {
                let source = u.resolution.namespace.as_deref().unwrap_or("arbitrary");
                println!(
                    "  {} {} {}",
                    format!("{:<24}", u.candidate).bold(),
                    format!("[{source}]").dimmed(),
                    u.resolution.value
                );
            }
        }

        if !self.warnings.is_empty() {
            println!("\n{}", "Warnings:".yellow());
            for warning in &self.warnings {
                println!("  {warning}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ResolveResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.value {
                Some(value) => println!("{value}"),
                None => println!(
                    "{} {}.{} not found",
                    "error:".red(),
                    self.namespace,
                    self.key
                ),
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl NamespacesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for ns in &self.namespaces {
                    println!("  {:<24} {} entries", ns.name, ns.entries);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
