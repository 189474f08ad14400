//! Project name validation.

use std::fmt;

use crate::domain::error::{DomainError, NameRule};

/// Minimum accepted name length, in characters.
pub const MIN_LEN: usize = 3;
/// Maximum accepted name length, in characters.
pub const MAX_LEN: usize = 50;

/// Names that would collide with tooling or build output directories.
pub const RESERVED_NAMES: &[&str] = &[
    "node_modules",
    "src",
    "dist",
    "build",
    "test",
    "tests",
    ".git",
    "package.json",
];

/// Validate a candidate project name.
///
/// Rules, first failure wins:
/// 1. non-empty
/// 2. only `[A-Za-z0-9_-]`
/// 3. at least [`MIN_LEN`] characters
/// 4. at most [`MAX_LEN`] characters
/// 5. not in [`RESERVED_NAMES`] (case-insensitive)
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let reject = |rule| {
        Err(DomainError::InvalidProjectName {
            name: name.to_string(),
            rule,
        })
    };

    if name.is_empty() {
        return reject(NameRule::Required);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return reject(NameRule::DisallowedCharacter);
    }
    // Only ASCII survives rule 2, so byte length == character count.
    if name.len() < MIN_LEN {
        return reject(NameRule::TooShort);
    }
    if name.len() > MAX_LEN {
        return reject(NameRule::TooLong);
    }
    if RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
    {
        return reject(NameRule::Reserved);
    }

    Ok(())
}

/// A project name that passed [`validate_project_name`].
///
/// Invariant: only constructible through [`ProjectName::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_project_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
