pub mod common;
pub mod component;
pub mod project_structure;

pub use crate::domain::DomainError;
pub use component::{ComponentSpec, DerivedNames, SymbolNames};
pub use project_structure::ProjectStructure;
