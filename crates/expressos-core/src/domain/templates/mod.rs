//! Pure content functions. Nothing here touches the filesystem; each
//! function returns a [`ProjectStructure`](crate::domain::ProjectStructure)
//! for the materializer to flush.

pub mod component;
pub mod project;

pub use component::{middleware_structure, service_structure, use_case_structure};
pub use project::{BASE_DIRECTORIES, package_json, project_structure, tsconfig_json};
