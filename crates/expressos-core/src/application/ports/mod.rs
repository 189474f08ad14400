//! Application ports (traits) for external dependencies.
//!
//! Driven (output) ports are called by the application and implemented in
//! `expressos-adapters`. The CLI drives the services directly.

pub mod output;

pub use output::{DirEntry, Filesystem};

#[cfg(test)]
pub use output::MockFilesystem;
