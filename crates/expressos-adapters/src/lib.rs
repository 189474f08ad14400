//! Infrastructure adapters for ExpressOS.
//!
//! Implements the ports defined in `expressos_core::application::ports`.
//! All real I/O lives here.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
