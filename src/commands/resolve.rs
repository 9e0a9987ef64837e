//! Resolve a single token

use std::process::ExitCode;

use tokenwind::output::{OutputMode, ResolveResult};

use super::load_project;
use crate::cli::Project;

/// Print the value of `namespace.key`, exiting 1 if it is not defined
pub fn resolve(
    project: &Project,
    namespace: &str,
    key: &str,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let (config, _) = load_project(project)?;
    let registry = config.registry()?;

    let result = ResolveResult {
        namespace: namespace.to_string(),
        key: key.to_string(),
        value: registry.resolve(namespace, key).cloned(),
    };
    result.render(mode);

    Ok(if result.value.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
