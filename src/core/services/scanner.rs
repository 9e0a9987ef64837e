//! Content scanner - lazy candidate extraction over matched files
//!
//! [`Scanner::scan`] returns an iterator; nothing is listed or read until it
//! is driven. Each call starts from scratch, so a second scan sees files
//! that changed since the first.
//!
//! Errors are items of the sequence, never its end: an unreadable file or a
//! malformed pattern yields one `Err` and the scan moves on.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};

use super::extract::Extractor;
use crate::core::error::ScanError;
use crate::core::models::{Candidate, ContentPattern};
use crate::core::ports::{FileSource, PathIter};

/// Scans files from a [`FileSource`] for candidates
#[derive(Debug)]
pub struct Scanner<S> {
    source: S,
    extractor: Extractor,
}

impl<S: FileSource> Scanner<S> {
    /// Scanner using the default delimiter-based extraction
    pub fn new(source: S) -> Self {
        Self::with_extractor(source, Extractor::default())
    }

    /// Scanner using a specific extractor
    pub const fn with_extractor(source: S, extractor: Extractor) -> Self {
        Self { source, extractor }
    }

    /// The underlying file source
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Scan every file matched by `patterns`
    ///
    /// Patterns are compiled as they are reached, so an invalid one only
    /// costs its own matches. A file matched by several patterns is read
    /// once per scan.
    pub fn scan<'a>(&'a self, patterns: &'a [String]) -> Scan<'a, S> {
        Scan {
            scanner: self,
            patterns: patterns.iter(),
            files: None,
            pending: Vec::new().into_iter(),
            seen: HashSet::new(),
            files_read: 0,
        }
    }
}

/// Iterator returned by [`Scanner::scan`]
pub struct Scan<'a, S> {
    scanner: &'a Scanner<S>,
    patterns: std::slice::Iter<'a, String>,
    files: Option<PathIter<'a>>,
    pending: std::vec::IntoIter<Candidate>,
    seen: HashSet<PathBuf>,
    files_read: usize,
}

impl<S: FileSource> Scan<'_, S> {
    /// Number of files successfully read so far
    #[must_use]
    pub const fn files_read(&self) -> usize {
        self.files_read
    }

    fn next_pattern(&mut self) -> Option<Result<(), ScanError>> {
        let raw = self.patterns.next()?;
        let scanner = self.scanner;
        match ContentPattern::parse(raw) {
            Ok(pattern) => {
                debug!("expanding content pattern `{pattern}`");
                self.files = Some(scanner.source.list_matching(&pattern));
                Some(Ok(()))
            },
            Err(err) => {
                warn!("{err}");
                Some(Err(err))
            },
        }
    }

    fn read(&mut self, path: PathBuf) -> Result<(), ScanError> {
        let content = self.scanner.source.read_to_string(&path).inspect_err(|err| {
            warn!("skipping file: {err}");
        })?;
        self.files_read += 1;

        let file: Arc<Path> = Arc::from(path);
        let candidates: Vec<Candidate> = self
            .scanner
            .extractor
            .extract(&content)
            .into_iter()
            .map(|text| Candidate::new(text, Arc::clone(&file)))
            .collect();

        debug!("{}: {} candidates", file.display(), candidates.len());
        self.pending = candidates.into_iter();
        Ok(())
    }
}

impl<S: FileSource> Iterator for Scan<'_, S> {
    type Item = Result<Candidate, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(candidate) = self.pending.next() {
                return Some(Ok(candidate));
            }

            if let Some(files) = self.files.as_mut() {
                match files.next() {
                    Some(Ok(path)) => {
                        if !self.seen.insert(path.clone()) {
                            continue;
                        }
                        if let Err(err) = self.read(path) {
                            return Some(Err(err));
                        }
                    },
                    Some(Err(err)) => {
                        warn!("{err}");
                        return Some(Err(err));
                    },
                    None => self.files = None,
                }
                continue;
            }

            if let Err(err) = self.next_pattern()? {
                return Some(Err(err));
            }
        }
    }
}

impl<S> fmt::Debug for Scan<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scan")
            .field("remaining_patterns", &self.patterns.len())
            .field("listing", &self.files.is_some())
            .field("pending", &self.pending.len())
            .field("files_read", &self.files_read)
            .finish_non_exhaustive()
    }
}
