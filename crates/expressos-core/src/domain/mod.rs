// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for ExpressOS.
//!
//! Pure logic only: name casing, validation, component naming rules, the
//! services registry document and the template content. All I/O goes
//! through ports defined in the application layer.
//!
//! - **No I/O**: no filesystem, network, or process calls
//! - **Fail early**: every [`DomainError`] is raised before a file is written
//! - **Values, not identities**: everything here is `Clone` + `PartialEq`
pub mod entities;
pub mod error;
pub mod naming;
pub mod project_name;
pub mod registry;
pub mod render;
pub mod templates;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    component::{ComponentSpec, DerivedNames, SymbolNames},
    project_structure::{FileToWrite, ProjectStructure},
};

pub use error::{DomainError, ErrorCategory, NameRule};

pub use naming::{is_identifier, to_camel_case, to_kebab_case, to_pascal_case};
pub use project_name::{ProjectName, validate_project_name};
pub use registry::{
    ImportBinding, PreludeLine, REGISTRY_PATH, RegistryChange, RegistryEntry, ServiceRegistry,
};
pub use render::RenderContext;
pub use value_objects::{ComponentKind, DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, ProjectOptions};

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn component_kind_parses_aliases() {
        assert_eq!(ComponentKind::from_str("usecase").unwrap(), ComponentKind::UseCase);
        assert_eq!(ComponentKind::from_str("use-case").unwrap(), ComponentKind::UseCase);
        assert_eq!(ComponentKind::from_str("Service").unwrap(), ComponentKind::Service);
        assert_eq!(ComponentKind::from_str("MODULE").unwrap(), ComponentKind::Module);
    }

    #[test]
    fn unknown_component_kind_lists_supported() {
        let err = ComponentKind::from_str("controller").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown component type: controller. Supported types: usecase, service, middleware, module"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn component_kind_default_paths() {
        assert_eq!(ComponentKind::UseCase.default_path(), "src/modules");
        assert_eq!(ComponentKind::Module.default_path(), "src/modules");
        assert_eq!(ComponentKind::Service.default_path(), "src/services");
        assert_eq!(ComponentKind::Middleware.default_path(), "src/middlewares");
    }

    #[test]
    fn project_options_defaults() {
        let options = ProjectOptions::new(ProjectName::parse("shop-api").unwrap())
            .with_description(Some("   ".into()));
        assert_eq!(options.description(), DEFAULT_DESCRIPTION);
        assert_eq!(options.author(), DEFAULT_AUTHOR);
        assert!(!options.typescript());
    }

    // ========================================================================
    // Naming Property Tests
    // ========================================================================

    fn strip_separators(s: &str) -> String {
        s.chars()
            .filter(|c| !(*c == '-' || *c == '_' || c.is_whitespace()))
            .collect()
    }

    #[test]
    fn camel_keeps_content_and_starts_lower() {
        for input in ["user profile", "Order_Items", "rate-limit", "a  b__c", "X1 y2"] {
            let camel = to_camel_case(input);
            assert!(camel.starts_with(|c: char| c.is_ascii_lowercase()), "{input}");
            assert!(strip_separators(input).eq_ignore_ascii_case(&camel), "{input}");
        }
    }

    #[test]
    fn pascal_kebab_pascal_is_stable() {
        for input in ["user-profile", "order_items", "send email", "Billing"] {
            let once = to_pascal_case(input);
            let twice = to_pascal_case(&to_kebab_case(&once));
            assert_eq!(to_pascal_case(&to_kebab_case(&twice)), twice, "{input}");
        }
    }

    // ========================================================================
    // Component Spec Tests
    // ========================================================================

    #[test]
    fn module_behaves_like_use_case() {
        let a = ComponentSpec::new(ComponentKind::Module, "auth login", None).unwrap();
        let b = ComponentSpec::new(ComponentKind::UseCase, "auth login", None).unwrap();
        assert_eq!(a.derive_names().unwrap(), b.derive_names().unwrap());
    }

    #[test]
    fn use_case_layout_under_custom_path() {
        let spec = ComponentSpec::new(
            ComponentKind::UseCase,
            "auth login",
            Some(PathBuf::from("src/features")),
        )
        .unwrap();
        let structure = templates::use_case_structure(".", &spec.derive_names().unwrap());
        let files: Vec<&Path> = structure.files().map(|f| f.path.as_path()).collect();
        assert_eq!(
            files,
            [
                Path::new("src/features/auth/login/input.ts"),
                Path::new("src/features/auth/login/output.ts"),
                Path::new("src/features/auth/login/useCase.ts"),
                Path::new("src/features/auth/login/index.ts"),
            ]
        );
    }

    // ========================================================================
    // Project Structure Tests
    // ========================================================================

    #[test]
    fn project_structure_builds_correctly() {
        let structure = ProjectStructure::new("/tmp/test")
            .with_directory("src")
            .with_file("src/index.ts", "export {};");

        assert_eq!(structure.entry_count(), 2);
        assert_eq!(structure.files().count(), 1);
        assert_eq!(structure.directories().count(), 1);
        assert!(structure.validate().is_ok());
    }

    #[test]
    fn project_structure_rejects_duplicates() {
        let structure = ProjectStructure::new("/tmp/test")
            .with_file("index.ts", "")
            .with_file("index.ts", "");

        assert!(matches!(
            structure.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn project_structure_rejects_absolute_entries() {
        let structure = ProjectStructure::new("/tmp/test").with_file("/etc/passwd", "");
        assert!(matches!(
            structure.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }
}
