// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::fmt;

use thiserror::Error;

/// Root domain error type.
///
/// Every variant here is detected by pure logic, before anything touches
/// the filesystem. All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {rule}")]
    InvalidProjectName { name: String, rule: NameRule },

    #[error("Invalid component name '{name}': {reason}")]
    InvalidComponentName { name: String, reason: String },

    #[error("Unknown component type: {kind}. Supported types: {}", ComponentKindList)]
    UnknownComponentKind { kind: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate path in output: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Document Errors
    // ========================================================================
    #[error("Services registry is malformed at line {line}: {reason}")]
    MalformedRegistry { line: usize, reason: String },
}

/// The project-name rule that rejected a candidate.
///
/// Rules are checked in declaration order; the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    Required,
    DisallowedCharacter,
    TooShort,
    TooLong,
    Reserved,
}

impl fmt::Display for NameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "Project name is required",
            Self::DisallowedCharacter => {
                "Project name can only contain letters, numbers, hyphens, and underscores"
            }
            Self::TooShort => "Project name must be at least 3 characters long",
            Self::TooLong => "Project name must be less than 50 characters",
            Self::Reserved => "name is reserved",
        })
    }
}

struct ComponentKindList;

impl fmt::Display for ComponentKindList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = crate::domain::ComponentKind::ALL
            .iter()
            .map(|k| k.as_str())
            .collect();
        f.write_str(&names.join(", "))
    }
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { rule, .. } => match rule {
                NameRule::Reserved => vec![
                    "node_modules, src, dist, build, test and tests are reserved".into(),
                    "Choose a more specific name, e.g. my-service".into(),
                ],
                _ => vec![
                    "Use 3 to 50 letters, numbers, hyphens, or underscores".into(),
                    "Examples: my-service, orders_api, shop2".into(),
                ],
            },
            Self::InvalidComponentName { .. } => vec![
                "Use a single name (\"login\") or a \"domain action\" pair (\"auth login\")".into(),
            ],
            Self::UnknownComponentKind { .. } => vec![
                format!("Supported types: {}", ComponentKindList),
                "Example: expressos generate usecase \"auth login\"".into(),
            ],
            Self::MalformedRegistry { .. } => vec![
                "src/services/services.ts no longer has the expected shape".into(),
                "Expected: leading comments, imports, `export const services = {`, properties, `};`"
                    .into(),
            ],
            Self::AbsolutePathNotAllowed { .. } => {
                vec!["Pass a path relative to the project root".into()]
            }
            Self::DuplicatePath { .. } => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::InvalidComponentName { .. }
            | Self::UnknownComponentKind { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::MalformedRegistry { .. } | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
