//! Driven (output) ports - implemented by infrastructure.

use std::path::{Path, PathBuf};

use crate::error::ExpressosResult;

/// One child of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `expressos_adapters::filesystem::LocalFilesystem` (production)
/// - `expressos_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Failures surface as `ApplicationError::Filesystem` with the offending
/// path and a coarse `FsErrorKind`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. No-op if present.
    fn create_dir_all(&self, path: &Path) -> ExpressosResult<()>;

    /// Write content to a file, replacing it. The parent must exist.
    fn write_file(&self, path: &Path, content: &str) -> ExpressosResult<()>;

    fn read_to_string(&self, path: &Path) -> ExpressosResult<String>;

    /// Copy a file byte-for-byte, replacing the destination.
    fn copy_file(&self, from: &Path, to: &Path) -> ExpressosResult<()>;

    /// Immediate children of a directory, sorted by path.
    fn read_dir(&self, path: &Path) -> ExpressosResult<Vec<DirEntry>>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}
