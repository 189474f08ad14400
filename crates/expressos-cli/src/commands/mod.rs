//! Command handlers.
//!
//! Each handler translates parsed arguments into a core request, runs it
//! against the local filesystem, and reports the result.  No business logic
//! lives here.

pub mod completions;
pub mod config;
pub mod create;
pub mod generate;

use std::path::PathBuf;

use crate::error::CliResult;

/// Directory every command resolves relative paths against.
fn working_dir() -> CliResult<PathBuf> {
    Ok(std::env::current_dir()?)
}
