//! Command implementations

mod namespaces;
mod resolve;
mod scan;

use std::path::{Path, PathBuf};

use tokenwind::ProjectConfig;

use crate::cli::Project;

pub use namespaces::namespaces;
pub use resolve::resolve;
pub use scan::scan;

/// Load the project config and decide the scan root
fn load_project(project: &Project) -> anyhow::Result<(ProjectConfig, PathBuf)> {
    let cwd = std::env::current_dir()?;

    let config = match &project.config {
        Some(path) => ProjectConfig::load(path)?,
        None => ProjectConfig::discover(project.root.as_deref().unwrap_or(cwd.as_path()))?,
    };

    let root = project
        .root
        .clone()
        .or_else(|| config.dir().map(Path::to_path_buf))
        .unwrap_or(cwd);

    Ok((config, root))
}
