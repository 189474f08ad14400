//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "expressos",
    bin_name = "expressos",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Clean-architecture Express project scaffolding",
    long_about = "ExpressOS creates Express service skeletons laid out by a fixed \
                  clean-architecture convention, and adds use cases, services and \
                  middlewares to existing projects.",
    after_help = "EXAMPLES:\n\
        \x20 expressos create shop-api --typescript\n\
        \x20 expressos usecase auth login\n\
        \x20 expressos service user profile\n\
        \x20 expressos generate middleware rate limit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "init",
        about = "Create a new Express project",
        after_help = "EXAMPLES:\n\
            \x20 expressos create shop-api\n\
            \x20 expressos create shop-api --typescript --author \"Jane Doe\"\n\
            \x20 expressos create --interactive"
    )]
    Create(CreateArgs),

    /// Add a use case module.
    #[command(
        about = "Generate a use case",
        after_help = "EXAMPLES:\n\
            \x20 expressos usecase login             # src/modules/login\n\
            \x20 expressos usecase auth login        # src/modules/auth/login\n\
            \x20 expressos usecase auth login --path src/features"
    )]
    Usecase(UsecaseArgs),

    /// Add a service and register it.
    #[command(
        about = "Generate a service",
        after_help = "EXAMPLES:\n\
            \x20 expressos service mailer\n\
            \x20 expressos service user profile"
    )]
    Service(NameArgs),

    /// Add a middleware.
    #[command(
        about = "Generate a middleware",
        after_help = "EXAMPLES:\n\
            \x20 expressos middleware rate limit"
    )]
    Middleware(NameArgs),

    /// Generic generator taking the component type as an argument.
    #[command(
        visible_alias = "g",
        about = "Generate a component by type",
        after_help = "TYPES:\n\
            \x20 usecase, service, middleware, module\n\n\
            EXAMPLES:\n\
            \x20 expressos generate usecase auth login\n\
            \x20 expressos g service user profile"
    )]
    Generate(GenerateArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 expressos config get defaults.author\n\
            \x20 expressos config list\n\
            \x20 expressos config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 expressos completions bash > ~/.local/share/bash-completion/completions/expressos\n\
            \x20 expressos completions zsh  > ~/.zfunc/_expressos\n\
            \x20 expressos completions fish > ~/.config/fish/completions/expressos.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `expressos create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project name; prompted for when omitted.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Emit `tsconfig.json` and TypeScript build scripts.
    #[arg(long = "typescript", visible_alias = "ts", help = "Use TypeScript")]
    pub typescript: bool,

    /// Ask for every option, even those given on the command line.
    #[arg(short = 'i', long = "interactive", help = "Prompt for project options")]
    pub interactive: bool,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    #[arg(short = 'a', long = "author", value_name = "NAME", help = "Project author")]
    pub author: Option<String>,

    /// Directory whose contents are copied over the generated project.
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Extra files to copy into the project"
    )]
    pub template_dir: Option<PathBuf>,
}

// ── generators ────────────────────────────────────────────────────────────────

/// Arguments for `expressos usecase`.
#[derive(Debug, Args)]
pub struct UsecaseArgs {
    /// Domain, or the whole use case name when no action is given.
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    #[arg(value_name = "ACTION")]
    pub action: Option<String>,

    /// Directory that holds modules, relative to the project root.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        help = "Module directory (default: src/modules)"
    )]
    pub path: Option<PathBuf>,
}

impl UsecaseArgs {
    /// `"auth"` + `"login"` → `"auth login"`.
    pub fn joined_name(&self) -> String {
        match &self.action {
            Some(action) => format!("{} {action}", self.domain),
            None => self.domain.clone(),
        }
    }
}

/// Name words for `service` and `middleware`.
#[derive(Debug, Args)]
pub struct NameArgs {
    /// One or two words, e.g. `user profile`.
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub name: Vec<String>,
}

/// Arguments for `expressos generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Component type: usecase, service, middleware or module.
    #[arg(value_name = "TYPE")]
    pub kind: String,

    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub name: Vec<String>,

    /// Target directory; honoured by usecase and module only.
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    pub path: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `expressos completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `expressos config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
