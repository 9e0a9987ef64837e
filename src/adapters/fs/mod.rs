//! File system adapter for the [`FileSource`](crate::core::ports::FileSource) port

mod walk;

pub use walk::WalkFileSource;
