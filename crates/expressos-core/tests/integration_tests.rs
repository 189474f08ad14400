//! Integration tests for expressos-core's public API.
//!
//! Filesystem-backed workflows live in expressos-adapters; these cover the
//! pure pipeline from user input to generated content.

use std::path::{Path, PathBuf};

use expressos_core::domain::{
    ComponentKind, ComponentSpec, DomainError, NameRule, ProjectName, ProjectOptions,
    REGISTRY_PATH, ServiceRegistry, templates,
};

#[test]
fn scaffold_registry_accepts_generated_services() {
    let options = ProjectOptions::new(ProjectName::parse("shop-api").unwrap());
    let structure = templates::project_structure(&options, "shop-api");
    let stub = structure.file(REGISTRY_PATH).unwrap();

    let mut registry = ServiceRegistry::parse(stub).unwrap();
    for raw in ["user profile", "mailer", "user profile"] {
        let spec = ComponentSpec::new(ComponentKind::Service, raw, None).unwrap();
        registry.register_service(&spec.symbol_names().camel_name);
    }

    let rendered = registry.render();
    assert_eq!(rendered.matches("import { userProfileService } from './userProfile';").count(), 1);
    assert_eq!(rendered.matches("userProfile: userProfileService,").count(), 1);
    assert_eq!(rendered.matches("mailer: mailerService,").count(), 1);
    assert!(rendered.ends_with("export type Services = typeof services;\n"));
    assert_eq!(ServiceRegistry::parse(&rendered).unwrap(), registry);
}

#[test]
fn use_case_depths_match_layout() {
    for (raw, dir, root) in [
        ("login", "src/modules/login", "../../"),
        ("auth login", "src/modules/auth/login", "../../../"),
    ] {
        let spec = ComponentSpec::new(ComponentKind::UseCase, raw, None).unwrap();
        let names = spec.derive_names().unwrap();
        assert_eq!(names.module_path.as_path(), Path::new(dir));

        let structure = templates::use_case_structure(PathBuf::from("."), &names);
        let use_case = structure.file(Path::new(dir).join("useCase.ts")).unwrap();
        assert!(use_case.contains(&format!("from '{root}services/services'")), "{raw}");
    }
}

#[test]
fn generator_input_rejected_before_any_structure_is_built() {
    assert!(matches!(
        ComponentSpec::new(ComponentKind::UseCase, "one two three", None),
        Err(DomainError::InvalidComponentName { .. })
    ));
    assert!(matches!(
        "widget".parse::<ComponentKind>(),
        Err(DomainError::UnknownComponentKind { .. })
    ));
    assert!(matches!(
        ProjectName::parse("build"),
        Err(DomainError::InvalidProjectName {
            rule: NameRule::Reserved,
            ..
        })
    ));
}
