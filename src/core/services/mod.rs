//! Business logic services
//!
//! Pure logic over domain models. The only I/O happens behind the
//! [`FileSource`](crate::core::ports::FileSource) port the scanner is given.
//!
//! - [`merge`] - Merge base, overrides and extend into a resolved theme
//! - [`registry`] - Own the layers and cache the merge
//! - [`extract`] - Split content into candidates
//! - [`scanner`] - Lazy scanning over matched files
//! - [`utility`] - Parse utility classes and look them up
//! - [`engine`] - Scan and resolve in one pass

pub mod engine;
pub mod extract;
pub mod merge;
pub mod registry;
pub mod scanner;
pub mod utility;

pub use engine::{ResolvedUtility, ScanReport, run};
pub use extract::Extractor;
pub use merge::{load, merge};
pub use registry::ThemeRegistry;
pub use scanner::{Scan, Scanner};
