//! Implementation of the `expressos create` command.
//!
//! Responsibility: merge flags, configuration and prompt answers into
//! `ProjectOptions`, call the core scaffold service, and display results.

use tracing::{debug, info, instrument};

use expressos_adapters::LocalFilesystem;
use expressos_core::{
    application::ScaffoldService,
    domain::{ProjectName, ProjectOptions},
    error::ExpressosError,
};

use crate::{
    cli::CreateArgs,
    commands::working_dir,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::{self, ProjectAnswers},
};

#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(args: CreateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let needs_prompt = args.interactive || args.name.is_none();
    let seed = seed_answers(&args, config);

    let answers = if needs_prompt {
        debug!("Prompting for project options");
        prompt::ask(seed, output.supports_color())?
    } else {
        seed
    };

    let options = build_options(answers)?;
    let cwd = working_dir()?;

    output.header(&format!("Creating '{}'...", options.name()))?;
    let report = ScaffoldService::new(Box::new(LocalFilesystem::new())).scaffold(
        &options,
        &cwd,
        args.template_dir.as_deref(),
    )?;
    info!(files = report.files_written.len(), "Project created");

    output.success(&format!(
        "Project '{}' created in {}",
        options.name(),
        report.project_dir.display()
    ))?;
    output.file_list(&report.files_written)?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.project_dir.display()))?;
        output.print("  npm install")?;
        output.print("  npm run dev")?;
    }

    Ok(())
}

/// Flags win over configured defaults.
fn seed_answers(args: &CreateArgs, config: &AppConfig) -> ProjectAnswers {
    ProjectAnswers {
        name: args.name.clone(),
        description: args
            .description
            .clone()
            .unwrap_or_else(|| config.defaults.description.clone()),
        author: args
            .author
            .clone()
            .unwrap_or_else(|| config.defaults.author.clone()),
        typescript: args.typescript || config.defaults.typescript,
    }
}

fn build_options(answers: ProjectAnswers) -> CliResult<ProjectOptions> {
    let name =
        ProjectName::parse(answers.name.unwrap_or_default()).map_err(ExpressosError::from)?;
    Ok(ProjectOptions::new(name)
        .with_description(Some(answers.description))
        .with_author(Some(answers.author))
        .with_typescript(answers.typescript))
}
