//! Candidate tokens extracted from scanned content

use std::path::Path;
use std::sync::Arc;

/// A text fragment that could be a utility class
///
/// Candidates from the same file share one path allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// The fragment itself, e.g. `h-128` or `md:font-h1`
    pub text: String,

    /// File the fragment was found in (relative to the scan root)
    pub file: Arc<Path>,
}

impl Candidate {
    /// Create a candidate
    pub fn new(text: impl Into<String>, file: Arc<Path>) -> Self {
        Self {
            text: text.into(),
            file,
        }
    }
}
