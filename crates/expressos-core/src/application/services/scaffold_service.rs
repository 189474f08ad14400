//! Scaffold Service - creates a new project.
//!
//! 1. Refuse an existing target directory
//! 2. Build the project structure from the options
//! 3. Materialize it, then mirror the optional template overlay

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, error::FsErrorKind, ports::Filesystem,
        services::materializer::Materializer,
    },
    domain::{ProjectOptions, templates},
    error::ExpressosResult,
};

/// What a scaffold run produced. Paths are relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub files_written: Vec<PathBuf>,
}

pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold `options.name()` under `cwd`.
    ///
    /// Fails with `ProjectExists` before writing anything if the target is
    /// present. `template_dir`, when given, must be a directory; its contents
    /// are copied over the generated files.
    #[instrument(
        skip_all,
        fields(
            project = %options.name(),
            cwd = %cwd.display(),
            typescript = options.typescript()
        )
    )]
    pub fn scaffold(
        &self,
        options: &ProjectOptions,
        cwd: &Path,
        template_dir: Option<&Path>,
    ) -> ExpressosResult<ScaffoldReport> {
        let root = cwd.join(options.name().as_str());

        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }
        if let Some(dir) = template_dir {
            if !self.filesystem.is_dir(dir) {
                return Err(ApplicationError::filesystem(
                    dir,
                    FsErrorKind::NotFound,
                    "template directory does not exist",
                )
                .into());
            }
        }

        let structure = templates::project_structure(options, &root);
        let materializer = Materializer::new(self.filesystem.as_ref());

        let mut written = materializer.materialize(&structure)?;
        info!(files = written.len(), "Project files written");

        if let Some(dir) = template_dir {
            for copied in materializer.copy_tree(dir, &root)? {
                if !written.contains(&copied) {
                    written.push(copied);
                }
            }
            info!(template_dir = %dir.display(), "Template overlay copied");
        }

        Ok(ScaffoldReport {
            project_dir: relative_to(cwd, &root),
            files_written: written.iter().map(|p| relative_to(cwd, p)).collect(),
        })
    }
}

pub(crate) fn relative_to(base: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
