//! Interactive questions for `expressos create`.
//!
//! Compiled with the `interactive` feature (on by default); without it,
//! asking fails with [`CliError::FeatureNotAvailable`].

use crate::error::{CliError, CliResult};

/// Name offered when the user has not typed one.
pub const DEFAULT_PROJECT_NAME: &str = "expresso-app";

/// Project options as collected from flags, config and prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAnswers {
    pub name: Option<String>,
    pub description: String,
    pub author: String,
    pub typescript: bool,
}

/// Ask for every option, offering the current values as defaults.
///
/// Refuses to run when stdin is not a terminal.
#[cfg(feature = "interactive")]
pub fn ask(seed: ProjectAnswers, color: bool) -> CliResult<ProjectAnswers> {
    use std::io::IsTerminal as _;

    use dialoguer::{
        Confirm, Input,
        theme::{ColorfulTheme, SimpleTheme, Theme},
    };
    use expressos_core::domain::validate_project_name;

    if !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "a project name is required when input is not a terminal".into(),
            source: None,
        });
    }

    let colorful = ColorfulTheme::default();
    let theme: &dyn Theme = if color { &colorful } else { &SimpleTheme };

    let name: String = Input::with_theme(theme)
        .with_prompt("Project name")
        .default(seed.name.unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()))
        .validate_with(|input: &String| validate_project_name(input).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(prompt_error)?;

    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .default(seed.description)
        .interact_text()
        .map_err(prompt_error)?;

    let author: String = Input::with_theme(theme)
        .with_prompt("Author")
        .default(seed.author)
        .interact_text()
        .map_err(prompt_error)?;

    let typescript = Confirm::with_theme(theme)
        .with_prompt("Use TypeScript?")
        .default(seed.typescript)
        .interact()
        .map_err(prompt_error)?;

    Ok(ProjectAnswers {
        name: Some(name),
        description,
        author,
        typescript,
    })
}

#[cfg(not(feature = "interactive"))]
pub fn ask(_seed: ProjectAnswers, _color: bool) -> CliResult<ProjectAnswers> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    CliError::Prompt {
        message: err.to_string(),
    }
}
