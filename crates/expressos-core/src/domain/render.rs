//! `{{VARIABLE}}` interpolation for template text.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::domain::naming::{to_camel_case, to_kebab_case, to_pascal_case};

/// Variables available to a template.
///
/// Built-in variables are `SCREAMING_SNAKE_CASE`. Unknown placeholders are
/// left in the output untouched.
///
/// | Variable | Example |
/// |----------|---------|
/// | `PROJECT_NAME` | `shop-api` |
/// | `PROJECT_NAME_PASCAL` | `ShopApi` |
/// | `PROJECT_NAME_CAMEL` | `shopApi` |
/// | `PROJECT_NAME_KEBAB` | `shop-api` |
/// | `YEAR` | `2026` |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Context with no variables at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Context carrying the project-name variants and the current year.
    pub fn for_project(project_name: &str) -> Self {
        Self::empty()
            .with_variable("PROJECT_NAME", project_name)
            .with_variable("PROJECT_NAME_PASCAL", to_pascal_case(project_name))
            .with_variable("PROJECT_NAME_CAMEL", to_camel_case(project_name))
            .with_variable("PROJECT_NAME_KEBAB", to_kebab_case(project_name))
            .with_variable("YEAR", chrono::Local::now().year().to_string())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` whose key is defined.
    ///
    /// Single left-to-right scan, so substituted values are never
    /// re-expanded.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => match self.get(&after[..end]) {
                    Some(value) => {
                        out.push_str(value);
                        rest = &after[end + 2..];
                    }
                    None => {
                        out.push_str("{{");
                        rest = after;
                    }
                },
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}
