//! List theme namespaces

use std::process::ExitCode;

use tokenwind::output::{NamespaceInfo, NamespacesResult, OutputMode};

use super::load_project;
use crate::cli::Project;

/// Print every namespace of the merged theme with its entry count
pub fn namespaces(project: &Project, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let (config, _) = load_project(project)?;
    let registry = config.registry()?;
    let theme = registry.theme();

    let namespaces = theme
        .namespaces()
        .into_iter()
        .map(|name| NamespaceInfo {
            name: name.to_string(),
            entries: theme.namespace(name).map_or(0, |ns| ns.len()),
        })
        .collect();

    NamespacesResult { namespaces }.render(mode);
    Ok(ExitCode::SUCCESS)
}
