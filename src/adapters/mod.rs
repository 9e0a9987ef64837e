//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `fs/` - Pattern expansion and file reads over a directory tree

pub mod fs;
