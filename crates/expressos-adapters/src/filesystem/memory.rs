//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use expressos_core::{
    application::{
        ApplicationError, FsErrorKind,
        ports::{DirEntry, Filesystem},
    },
    error::{ExpressosError, ExpressosResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can hand one clone to a service
/// and inspect the other.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn check_writable(&self, path: &Path) -> ExpressosResult<()> {
        if self.read_only.iter().any(|ro| path.starts_with(ro)) {
            return Err(ApplicationError::filesystem(
                path,
                FsErrorKind::PermissionDenied,
                "read-only location",
            )
            .into());
        }
        Ok(())
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Make every write at or below `path` fail with `PermissionDenied`.
    pub fn set_read_only(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
    }

    fn read(&self) -> ExpressosResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> ExpressosResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> ExpressosError {
    ExpressosError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

fn not_found(path: &Path, what: &str) -> ExpressosError {
    ApplicationError::filesystem(path, FsErrorKind::NotFound, format!("{what} does not exist")).into()
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ExpressosResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if !inner.directories.contains(&current) {
                inner.check_writable(&current)?;
                inner.directories.insert(current.clone());
            }
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ExpressosResult<()> {
        let mut inner = self.write()?;
        inner.check_writable(path)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(not_found(parent, "parent directory"));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ExpressosResult<String> {
        self.read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ExpressosResult<()> {
        let content = self.read_to_string(from)?;
        self.write_file(to, &content)
    }

    fn read_dir(&self, path: &Path) -> ExpressosResult<Vec<DirEntry>> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(not_found(path, "directory"));
        }

        let is_child = |p: &&PathBuf| p.parent() == Some(path);
        let dirs = inner.directories.iter().filter(is_child).map(|p| DirEntry {
            path: p.clone(),
            is_dir: true,
        });
        let files = inner.files.keys().filter(is_child).map(|p| DirEntry {
            path: p.clone(),
            is_dir: false,
        });

        let mut entries: Vec<DirEntry> = dirs.chain(files).collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}
