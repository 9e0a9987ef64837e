//! Domain models for tokenwind
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ThemeLayer`] - Namespaced design tokens (base, overrides, extend)
//! - [`ResolvedTheme`] - The effective tokens after merging
//! - [`ContentPattern`] - A glob selecting files to scan
//! - [`Candidate`] - A fragment of scanned content
//! - [`ThemeConfig`] / [`ContentConfig`] - Config sections the engine consumes

mod candidate;
mod config;
mod pattern;
mod theme;
mod token;

pub use candidate::Candidate;
pub use config::{ContentConfig, ThemeConfig};
pub use pattern::ContentPattern;
pub use theme::ResolvedTheme;
pub use token::{DEFAULT_KEY, Namespace, RawLayer, ThemeLayer, TokenValue};
