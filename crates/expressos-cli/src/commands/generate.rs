//! `usecase`, `service`, `middleware` and `generate`: add one component to
//! the project in the working directory.

use std::path::PathBuf;

use tracing::{info, instrument};

use expressos_adapters::LocalFilesystem;
use expressos_core::{
    application::{GenerateService, GenerationReport, RegistryStatus},
    domain::{ComponentKind, ComponentSpec, REGISTRY_PATH},
    error::ExpressosError,
};

use crate::{
    cli::{GenerateArgs, NameArgs, UsecaseArgs},
    commands::working_dir,
    error::CliResult,
    output::OutputManager,
};

pub fn usecase(args: UsecaseArgs, output: &OutputManager) -> CliResult<()> {
    let name = args.joined_name();
    run(ComponentKind::UseCase, &name, args.path, output)
}

pub fn service(args: NameArgs, output: &OutputManager) -> CliResult<()> {
    run(ComponentKind::Service, &args.name.join(" "), None, output)
}

pub fn middleware(args: NameArgs, output: &OutputManager) -> CliResult<()> {
    run(ComponentKind::Middleware, &args.name.join(" "), None, output)
}

/// `generate <TYPE> <NAME>...`; the type is checked before anything else.
pub fn generic(args: GenerateArgs, output: &OutputManager) -> CliResult<()> {
    let kind: ComponentKind = args.kind.parse().map_err(ExpressosError::from)?;
    run(kind, &args.name.join(" "), args.path, output)
}

#[instrument(skip(kind, output), fields(kind = %kind))]
fn run(
    kind: ComponentKind,
    name: &str,
    path: Option<PathBuf>,
    output: &OutputManager,
) -> CliResult<()> {
    let spec = ComponentSpec::new(kind, name, path).map_err(ExpressosError::from)?;
    let cwd = working_dir()?;

    let report = GenerateService::new(Box::new(LocalFilesystem::new())).generate(&spec, &cwd)?;
    info!(files = report.files_written.len(), "Component generated");

    print_report(&report, output)
}

fn print_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    output.success(&format!(
        "Created {} {} in {}",
        noun(report.kind),
        report.name,
        report.location.display()
    ))?;
    output.file_list(&report.files_written)?;

    match report.registry {
        RegistryStatus::Updated => {
            output.success(&format!("Registered service in {REGISTRY_PATH}"))?;
        }
        RegistryStatus::AlreadyRegistered => {
            output.print(&format!("Service already registered in {REGISTRY_PATH}"))?;
        }
        RegistryStatus::Missing => {
            output.warning(&format!(
                "{REGISTRY_PATH} not found; register the service manually"
            ))?;
        }
        RegistryStatus::KeyConflict => {
            output.warning(&format!(
                "{REGISTRY_PATH} already uses this key for another service; register it manually"
            ))?;
        }
        RegistryStatus::NotApplicable => {}
    }

    Ok(())
}

fn noun(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::UseCase => "use case",
        ComponentKind::Service => "service",
        ComponentKind::Middleware => "middleware",
        ComponentKind::Module => "module",
    }
}
