//! Scan content files and report resolved utilities

use std::process::ExitCode;

use tokenwind::adapters::fs::WalkFileSource;
use tokenwind::core::services::{self, Scanner};
use tokenwind::output::{OutputMode, ScanResult};

use super::load_project;
use crate::cli::Project;

/// Run the engine over the configured content patterns
pub fn scan(project: &Project, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let (config, root) = load_project(project)?;
    let registry = config.registry()?;

    if config.content.files.is_empty() {
        log::warn!("no content patterns configured; nothing to scan");
    }

    let scanner = Scanner::with_extractor(WalkFileSource::new(&root), config.extractor()?);
    let report = services::run(registry.theme(), &scanner, &config.content.files);

    ScanResult::from(report).render(mode);
    Ok(ExitCode::SUCCESS)
}
