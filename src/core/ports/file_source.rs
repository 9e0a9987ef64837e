//! File source port
//!
//! Defines the capability the scanner needs from a file system: expand a
//! pattern into paths, and read one file.

use std::path::{Path, PathBuf};

use crate::core::error::ScanError;
use crate::core::models::ContentPattern;

/// Lazily produced paths for one pattern
///
/// An `Err` item reports an entry that could not be listed; listing
/// continues past it.
pub type PathIter<'a> = Box<dyn Iterator<Item = Result<PathBuf, ScanError>> + 'a>;

/// Source of files to scan
///
/// Implementations decide what a path is relative to; the scanner only
/// passes back the paths it was given.
pub trait FileSource: Send + Sync {
    /// List files matching `pattern`
    ///
    /// A pattern matching nothing yields an empty iterator, not an error.
    fn list_matching(&self, pattern: &ContentPattern) -> PathIter<'_>;

    /// Read one listed file
    ///
    /// Fails with [`ScanError::UnreadableFile`] on any I/O fault.
    fn read_to_string(&self, path: &Path) -> Result<String, ScanError>;
}
