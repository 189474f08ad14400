//! ExpressOS Core - hexagonal architecture implementation.
//!
//! Domain and application layers of the `expressos` scaffolder: naming and
//! validation rules, template content, the services registry document, and
//! the services that write projects and components through ports.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          expressos-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, GenerateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Filesystem)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   expressos-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use expressos_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>) -> ExpressosResult<()> {
//! let options = ProjectOptions::new(ProjectName::parse("shop-api")?).with_typescript(true);
//! let report = ScaffoldService::new(filesystem).scaffold(&options, Path::new("."), None)?;
//! println!("{} files written", report.files_written.len());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Public API - what external crates should use.
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationReport, RegistryStatus, ScaffoldReport, ScaffoldService,
        ports::{DirEntry, Filesystem},
    };
    pub use crate::domain::{
        ComponentKind, ComponentSpec, ProjectName, ProjectOptions, validate_project_name,
    };
    pub use crate::error::{ErrorCategory, ExpressosError, ExpressosResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
