//! Domain value objects: ComponentKind, ProjectOptions.
//!
//! Pure value types with equality-by-value and no identity. `ComponentKind`
//! carries its string forms and `FromStr` parser; `ProjectOptions` is the
//! immutable input record for a scaffold run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, project_name::ProjectName};

// ── ComponentKind ────────────────────────────────────────────────────────────

/// The kind of artifact a generator adds to an existing project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    UseCase,
    Service,
    Middleware,
    /// Same shape as `UseCase`.
    Module,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [Self::UseCase, Self::Service, Self::Middleware, Self::Module];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UseCase => "usecase",
            Self::Service => "service",
            Self::Middleware => "middleware",
            Self::Module => "module",
        }
    }

    /// Directory (relative to the project root) a component lands in when
    /// no path is given.
    pub const fn default_path(&self) -> &'static str {
        match self {
            Self::UseCase | Self::Module => "src/modules",
            Self::Service => "src/services",
            Self::Middleware => "src/middlewares",
        }
    }

    /// Whether a caller-supplied target path is honoured.
    ///
    /// Services and middlewares always go to their fixed directory.
    pub const fn accepts_custom_path(&self) -> bool {
        matches!(self, Self::UseCase | Self::Module)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "usecase" | "use-case" => Ok(Self::UseCase),
            "service" => Ok(Self::Service),
            "middleware" => Ok(Self::Middleware),
            "module" => Ok(Self::Module),
            _ => Err(DomainError::UnknownComponentKind { kind: s.to_string() }),
        }
    }
}

// ── ProjectOptions ───────────────────────────────────────────────────────────

/// Description used when the user gives none.
pub const DEFAULT_DESCRIPTION: &str = "An Express service with clean architecture";
/// Author used when the user gives none.
pub const DEFAULT_AUTHOR: &str = "ExpressOS Team";

/// Everything the scaffolder needs to know about a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    name: ProjectName,
    description: Option<String>,
    author: Option<String>,
    typescript: bool,
}

impl ProjectOptions {
    pub fn new(name: ProjectName) -> Self {
        Self {
            name,
            description: None,
            author: None,
            typescript: false,
        }
    }

    /// Blank strings count as "not given".
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author.filter(|a| !a.trim().is_empty());
        self
    }

    pub fn with_typescript(mut self, typescript: bool) -> Self {
        self.typescript = typescript;
        self
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or(DEFAULT_AUTHOR)
    }

    pub fn typescript(&self) -> bool {
        self.typescript
    }
}
