//! Application services - orchestrate use cases.
//!
//! Services take the working directory explicitly and talk to the disk only
//! through the [`Filesystem`](crate::application::ports::Filesystem) port.

pub mod generate_service;
pub mod materializer;
pub mod scaffold_service;

pub use generate_service::{GenerateService, GenerationReport, PROJECT_MARKERS, RegistryStatus};
pub use materializer::Materializer;
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
