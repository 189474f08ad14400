//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while touching the project on disk.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The scaffold target is already present; nothing was written.
    #[error("Directory \"{}\" already exists", path.display())]
    ProjectExists { path: PathBuf },

    /// A generator ran outside a scaffolded project.
    #[error(
        "This command must be run from within an ExpressOS project directory ({} lacks {missing})",
        path.display()
    )]
    NotAProject { path: PathBuf, missing: String },

    /// Filesystem operation failed. Earlier writes are not rolled back.
    #[error("Filesystem error at {}: {kind}: {reason}", path.display())]
    Filesystem {
        path: PathBuf,
        kind: FsErrorKind,
        reason: String,
    },
}

/// Coarse classification of filesystem failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    NotFound,
    PermissionDenied,
    AlreadyExists,
    Other,
}

impl From<io::ErrorKind> for FsErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                Self::PermissionDenied
            }
            io::ErrorKind::AlreadyExists => Self::AlreadyExists,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for FsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotFound => "not found",
            Self::PermissionDenied => "permission denied",
            Self::AlreadyExists => "already exists",
            Self::Other => "I/O error",
        })
    }
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, kind: FsErrorKind, reason: impl Into<String>) -> Self {
        Self::Filesystem {
            path: path.into(),
            kind,
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::NotAProject { .. } => vec![
                "Run this command from the root of a project created by `expressos create`".into(),
                "A project has src/, src/framework/ and src/modules/".into(),
            ],
            Self::Filesystem { kind, path, .. } => match kind {
                FsErrorKind::PermissionDenied => vec![
                    format!("Check that you have write permissions for {}", path.display()),
                ],
                FsErrorKind::NotFound => vec![format!("{} does not exist", path.display())],
                _ => vec![
                    "Files written before the failure were left in place".into(),
                    "Check the error details above".into(),
                ],
            },
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::NotAProject { .. } => ErrorCategory::NotFound,
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_kinds_map_to_fs_kinds() {
        assert_eq!(FsErrorKind::from(io::ErrorKind::NotFound), FsErrorKind::NotFound);
        assert_eq!(
            FsErrorKind::from(io::ErrorKind::PermissionDenied),
            FsErrorKind::PermissionDenied
        );
        assert_eq!(FsErrorKind::from(io::ErrorKind::Interrupted), FsErrorKind::Other);
    }

    #[test]
    fn project_exists_message() {
        let err = ApplicationError::ProjectExists {
            path: PathBuf::from("shop-api"),
        };
        assert_eq!(err.to_string(), "Directory \"shop-api\" already exists");
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }
}
