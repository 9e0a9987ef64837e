//! Walking file source
//!
//! Expands content patterns against a directory tree with `walkdir`.
//! Only the literal base directory of each pattern is walked, and no deeper
//! than the pattern can match: `./src/**` never touches `target/`, and
//! `*.html` stays at the top level. Hidden files and directories are
//! skipped. Walk errors under paths the pattern cannot match are dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::core::error::ScanError;
use crate::core::models::ContentPattern;
use crate::core::ports::{FileSource, PathIter};

/// [`FileSource`] over a real directory tree
///
/// Listed paths are relative to the root.
#[derive(Debug, Clone)]
pub struct WalkFileSource {
    root: PathBuf,
    follow_links: bool,
}

impl WalkFileSource {
    /// Source rooted at `root`
    ///
    /// A missing root is not an error; every pattern simply matches nothing.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            follow_links: true,
        }
    }

    /// Source rooted at the current working directory
    pub fn current_dir() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Whether to follow symbolic links while walking (default: yes)
    #[must_use]
    pub const fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// The root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_hidden(entry: &walkdir::DirEntry) -> bool {
        entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
    }
}

impl FileSource for WalkFileSource {
    fn list_matching(&self, pattern: &ContentPattern) -> PathIter<'_> {
        let start = self.root.join(pattern.base_dir());
        if !start.is_dir() {
            debug!("{}: base directory {} does not exist", pattern, start.display());
            return Box::new(std::iter::empty());
        }

        let root = &self.root;
        let pattern = pattern.clone();
        let mut walker = WalkDir::new(&start)
            .follow_links(self.follow_links)
            .sort_by_file_name();
        if let Some(depth) = pattern.max_depth() {
            walker = walker.max_depth(depth);
        }
        let walker = walker
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !Self::is_hidden(e));

        Box::new(walker.filter_map(move |entry| match entry {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    return None;
                }
                let relative = entry.path().strip_prefix(root).ok()?;
                pattern.matches(relative).then(|| Ok(relative.to_path_buf()))
            },
            Err(err) => {
                let path = err
                    .path()
                    .and_then(|p| p.strip_prefix(root).ok())
                    .map_or_else(|| pattern.base_dir(), Path::to_path_buf);
                if !pattern.could_contain(&path) {
                    debug!("{pattern}: ignoring walk error outside the pattern: {err}");
                    return None;
                }
                Some(Err(ScanError::UnreadableFile {
                    path,
                    source: err.into(),
                }))
            },
        }))
    }

    fn read_to_string(&self, path: &Path) -> Result<String, ScanError> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        fs::read_to_string(&absolute).map_err(|source| ScanError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
