//! Generate Service - adds one component to an existing project.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ports::Filesystem, services::materializer::Materializer,
        services::scaffold_service::relative_to,
    },
    domain::{
        ComponentKind, ComponentSpec, REGISTRY_PATH, RegistryChange, ServiceRegistry, templates,
    },
    error::ExpressosResult,
};

/// Directories that identify a scaffolded project.
pub const PROJECT_MARKERS: [&str; 3] = ["src", "src/framework", "src/modules"];

/// Outcome of the registry edit for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryStatus {
    /// Not a service.
    NotApplicable,
    Updated,
    AlreadyRegistered,
    /// `src/services/services.ts` does not exist; nothing was registered.
    Missing,
    /// The service's key already holds another value; the registry was left
    /// as it was.
    KeyConflict,
}

/// What a generator run produced. Paths are relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub kind: ComponentKind,
    /// PascalCase display name, e.g. `AuthLogin` or `UserProfile`.
    pub name: String,
    /// Module directory for use cases, containing directory otherwise.
    pub location: PathBuf,
    pub files_written: Vec<PathBuf>,
    pub registry: RegistryStatus,
}

impl GenerationReport {
    pub fn registry_updated(&self) -> bool {
        self.registry == RegistryStatus::Updated
    }
}

pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate `spec` inside the project rooted at `cwd`.
    #[instrument(
        skip_all,
        fields(kind = %spec.kind(), name = %spec.raw_name(), cwd = %cwd.display())
    )]
    pub fn generate(&self, spec: &ComponentSpec, cwd: &Path) -> ExpressosResult<GenerationReport> {
        self.ensure_project(cwd)?;

        let materializer = Materializer::new(self.filesystem.as_ref());
        let report = match spec.kind() {
            ComponentKind::UseCase | ComponentKind::Module => {
                let names = spec.derive_names()?;
                let structure = templates::use_case_structure(cwd, &names);
                let written = materializer.materialize(&structure)?;
                GenerationReport {
                    kind: spec.kind(),
                    name: names.pascal_name,
                    location: names.module_path.into_path_buf(),
                    files_written: written,
                    registry: RegistryStatus::NotApplicable,
                }
            }
            ComponentKind::Service => self.generate_service(spec, cwd, &materializer)?,
            ComponentKind::Middleware => {
                let names = spec.symbol_names();
                let dir = spec.target_path().as_path();
                let structure = templates::middleware_structure(cwd, dir, &names);
                let written = materializer.materialize(&structure)?;
                GenerationReport {
                    kind: spec.kind(),
                    name: names.pascal_name,
                    location: dir.to_path_buf(),
                    files_written: written,
                    registry: RegistryStatus::NotApplicable,
                }
            }
        };

        info!(
            files = report.files_written.len(),
            registry = ?report.registry,
            "Component generated"
        );

        Ok(GenerationReport {
            files_written: report
                .files_written
                .iter()
                .map(|p| relative_to(cwd, p))
                .collect(),
            ..report
        })
    }

    fn ensure_project(&self, cwd: &Path) -> ExpressosResult<()> {
        match PROJECT_MARKERS
            .iter()
            .find(|marker| !self.filesystem.is_dir(&cwd.join(marker)))
        {
            Some(missing) => Err(ApplicationError::NotAProject {
                path: cwd.to_path_buf(),
                missing: (*missing).to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }

    /// Service file plus registry edit. The registry is parsed before the
    /// service file is written so a malformed registry leaves no trace.
    fn generate_service(
        &self,
        spec: &ComponentSpec,
        cwd: &Path,
        materializer: &Materializer<'_>,
    ) -> ExpressosResult<GenerationReport> {
        let names = spec.symbol_names();
        let dir = spec.target_path().as_path();
        let registry_path = cwd.join(REGISTRY_PATH);

        let registry = if self.filesystem.exists(&registry_path) {
            let source = self.filesystem.read_to_string(&registry_path)?;
            Some(ServiceRegistry::parse(&source)?)
        } else {
            warn!(path = %registry_path.display(), "Services registry not found, skipping registration");
            None
        };

        let (status, updated) = match registry {
            None => (RegistryStatus::Missing, None),
            Some(mut registry) => match registry.register_service(&names.camel_name) {
                RegistryChange::Added => (RegistryStatus::Updated, Some(registry.render())),
                RegistryChange::Unchanged => (RegistryStatus::AlreadyRegistered, None),
                RegistryChange::KeyConflict { key, existing } => {
                    warn!(%key, %existing, "Registry key already in use, skipping registration");
                    (RegistryStatus::KeyConflict, None)
                }
            },
        };

        let structure = templates::service_structure(cwd, dir, &names);
        let mut written = materializer.materialize(&structure)?;
        if let Some(rendered) = updated {
            written.push(materializer.write(cwd, Path::new(REGISTRY_PATH), &rendered)?);
        }

        Ok(GenerationReport {
            kind: spec.kind(),
            name: names.pascal_name,
            location: dir.to_path_buf(),
            files_written: written,
            registry: status,
        })
    }
}
