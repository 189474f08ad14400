//! Flushes [`ProjectStructure`]s and mirrors directory trees through the
//! [`Filesystem`] port.
//!
//! Directory creation is idempotent and files are overwritten. Nothing is
//! rolled back: when an entry fails, the entries before it stay on disk.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        error::FsErrorKind,
        ports::Filesystem,
    },
    domain::ProjectStructure,
    error::ExpressosResult,
};

pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write `content` to `root/relative`, creating missing ancestors.
    pub fn write(&self, root: &Path, relative: &Path, content: &str) -> ExpressosResult<PathBuf> {
        let path = root.join(relative);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, content)?;
        debug!(path = %path.display(), bytes = content.len(), "Wrote file");
        Ok(path)
    }

    /// Recursively mirror `src` into `dest`, returning the copied files.
    #[instrument(skip(self), fields(src = %src.display(), dest = %dest.display()))]
    pub fn copy_tree(&self, src: &Path, dest: &Path) -> ExpressosResult<Vec<PathBuf>> {
        if !self.filesystem.is_dir(src) {
            return Err(ApplicationError::filesystem(
                src,
                FsErrorKind::NotFound,
                "source directory does not exist",
            )
            .into());
        }

        self.filesystem.create_dir_all(dest)?;

        let mut copied = Vec::new();
        for entry in self.filesystem.read_dir(src)? {
            let Some(name) = entry.path.file_name() else {
                continue;
            };
            let target = dest.join(name);
            if entry.is_dir {
                copied.extend(self.copy_tree(&entry.path, &target)?);
            } else {
                self.filesystem.copy_file(&entry.path, &target)?;
                debug!(path = %target.display(), "Copied file");
                copied.push(target);
            }
        }

        Ok(copied)
    }

    /// Create the root, then every directory entry, then every file entry.
    ///
    /// Returns the written file paths (root-joined), in entry order.
    #[instrument(skip_all, fields(root = %structure.root().display(), entries = structure.entry_count()))]
    pub fn materialize(&self, structure: &ProjectStructure) -> ExpressosResult<Vec<PathBuf>> {
        structure.validate()?;

        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for dir in structure.directories() {
            self.filesystem.create_dir_all(&root.join(dir))?;
        }

        structure
            .files()
            .map(|file| self.write(root, &file.path, &file.content))
            .collect()
    }
}
