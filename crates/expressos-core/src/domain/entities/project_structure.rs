//! Output of the template functions: what to create under one root.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Directories and files to create under `root`, in insertion order.
///
/// Built by the template functions, flushed once by the materializer, then
/// dropped. Entry paths are relative to `root`; directories are created
/// before any file regardless of the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectStructure {
    root: PathBuf,
    directories: Vec<PathBuf>,
    files: Vec<FileToWrite>,
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.push(FileToWrite {
            path: path.into(),
            content: content.into(),
        });
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.directories.push(path.into());
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    /// Every path must be relative and appear once across both lists.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        let paths = self
            .directories
            .iter()
            .chain(self.files.iter().map(|f| &f.path));

        for path in paths {
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
            if !seen.insert(path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.directories.iter().map(PathBuf::as_path)
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    /// Content of the file at `path`, if the structure contains one.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }

    pub fn entry_count(&self) -> usize {
        self.directories.len() + self.files.len()
    }
}
