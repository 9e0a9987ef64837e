//! Port traits (interfaces) for external dependencies
//!
//! The scanner depends only on [`FileSource`], never on a concrete file
//! system API. The walking implementation lives in `adapters::fs`; tests
//! substitute in-memory sources.

mod file_source;

pub use file_source::{FileSource, PathIter};
