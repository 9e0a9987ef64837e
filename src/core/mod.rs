//! Core domain logic for tokenwind
//!
//! This module contains pure logic with no direct I/O.
//! File access is abstracted through the port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ThemeLayer`, `ResolvedTheme`, `ContentPattern`)
//! - `services/` - Merging, scanning, utility resolution
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - `ConfigError` and `ScanError`

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{ConfigError, ScanError};
