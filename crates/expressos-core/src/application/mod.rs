//! Application layer for ExpressOS.
//!
//! - **Services**: scaffold a project, generate a component
//! - **Ports**: the `Filesystem` trait the services write through
//! - **Errors**: orchestration failures
//!
//! Business rules (naming, validation, registry shape) live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    GenerateService, GenerationReport, Materializer, RegistryStatus, ScaffoldReport,
    ScaffoldService,
};

pub use ports::{DirEntry, Filesystem};

pub use error::{ApplicationError, FsErrorKind};
