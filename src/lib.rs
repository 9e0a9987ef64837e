//! tokenwind - scan source files for utility classes and resolve them
//! against a layered design-token theme
//!
//! The library has two independent halves composed by [`core::services::run`]:
//!
//! - a **content scanner** that lazily extracts candidate tokens from the files
//!   matched by glob patterns, and
//! - a **theme registry** that merges a base token table with user overrides
//!   (`extend` adds, plain `theme` namespaces replace) and resolves
//!   `(namespace, key)` lookups.
//!
//! # Examples
//!
//! ```
//! use tokenwind::core::models::{ThemeConfig, ThemeLayer, TokenValue};
//! use tokenwind::core::services::ThemeRegistry;
//!
//! let base = ThemeLayer::new().with("height", "4", "1rem");
//! let theme: ThemeConfig = toml::from_str(
//!     r#"
//!     [extend.height]
//!     128 = "36rem"
//!     "#,
//! )
//! .unwrap();
//!
//! let registry = ThemeRegistry::new(base, theme).unwrap();
//! assert_eq!(registry.resolve("height", "128"), Some(&TokenValue::from("36rem")));
//! assert_eq!(registry.resolve("height", "4"), Some(&TokenValue::from("1rem")));
//! assert_eq!(registry.resolve("height", "999"), None);
//! ```

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod defaults;
pub mod output;

pub use crate::config::ProjectConfig;
pub use crate::core::{ConfigError, ScanError};
