//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use expressos_core::{
    application::{
        ApplicationError, FsErrorKind,
        ports::{DirEntry, Filesystem},
    },
    error::{ExpressosError, ExpressosResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ExpressosResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ExpressosResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> ExpressosResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ExpressosResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(to, e, "copy file"))
    }

    fn read_dir(&self, path: &Path) -> ExpressosResult<Vec<DirEntry>> {
        let read_dir = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(&entry.path(), e, "get file type"))?;
            entries.push(DirEntry {
                path: entry.path(),
                is_dir: file_type.is_dir(),
            });
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ExpressosError {
    trace!(path = %path.display(), kind = ?e.kind(), operation, "I/O failed");
    ApplicationError::filesystem(
        path,
        FsErrorKind::from(e.kind()),
        format!("Failed to {operation}: {e}"),
    )
    .into()
}
