//! Component specifications and the names derived from them.

use std::path::PathBuf;

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    naming::{is_identifier, to_camel_case, to_kebab_case, to_pascal_case},
    value_objects::ComponentKind,
};

/// Request to add one artifact to an existing project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    kind: ComponentKind,
    raw_name: String,
    target_path: RelativePath,
}

impl ComponentSpec {
    /// Build a spec, falling back to the kind's default directory when no
    /// path is given (or when the kind ignores custom paths).
    ///
    /// The name is checked here so that malformed input is rejected before
    /// the generator touches the filesystem.
    pub fn new(
        kind: ComponentKind,
        raw_name: impl Into<String>,
        target_path: Option<PathBuf>,
    ) -> Result<Self, DomainError> {
        let raw_name = raw_name.into();
        let target_path = match target_path {
            Some(path) if kind.accepts_custom_path() => RelativePath::try_new(path)?,
            _ => RelativePath::try_new(kind.default_path())?,
        };

        let spec = Self {
            kind,
            raw_name,
            target_path,
        };
        // Every kind shares the one-or-two word rule; the module layout
        // applies it, so deriving once is enough to validate.
        spec.derive_names()?;
        Ok(spec)
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn target_path(&self) -> &RelativePath {
        &self.target_path
    }

    /// Compute module, route and symbol names (use case / module layout).
    pub fn derive_names(&self) -> Result<DerivedNames, DomainError> {
        DerivedNames::derive(&self.raw_name, &self.target_path)
    }

    /// Symbol names over the whole raw name (service / middleware layout).
    ///
    /// `"user profile"` gives `UserProfile` / `userProfile`, unlike
    /// [`Self::derive_names`] which takes the camel name from the action.
    pub fn symbol_names(&self) -> SymbolNames {
        SymbolNames::of(&self.raw_name)
    }
}

/// Pascal/camel pair for single-file components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolNames {
    pub pascal_name: String,
    pub camel_name: String,
}

impl SymbolNames {
    pub fn of(raw_name: &str) -> Self {
        let trimmed = raw_name.trim();
        Self {
            pascal_name: to_pascal_case(trimmed),
            camel_name: to_camel_case(trimmed),
        }
    }
}

/// Names computed from a component's raw name. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// Type-level prefix, e.g. `AuthLogin` for `"auth login"`.
    pub pascal_name: String,
    /// Value-level name, e.g. `login` for `"auth login"`.
    pub camel_name: String,
    /// Route below `/api/`, e.g. `auth/login`.
    pub kebab_route: String,
    /// Directory of the generated module, relative to the project root.
    pub module_path: RelativePath,
    /// `../` hops from `module_path` back to `src/`.
    pub import_depth: usize,
}

impl DerivedNames {
    /// Depth of `<target>/<name>`.
    pub const FLAT_DEPTH: usize = 2;
    /// Depth of `<target>/<domain>/<action>`.
    pub const NESTED_DEPTH: usize = 3;

    /// Split `raw_name` on whitespace into one flat name or a
    /// `(domain, action)` pair.
    pub fn derive(raw_name: &str, target: &RelativePath) -> Result<Self, DomainError> {
        let words: Vec<&str> = raw_name.split_whitespace().collect();
        let invalid = |reason: &str| DomainError::InvalidComponentName {
            name: raw_name.to_string(),
            reason: reason.to_string(),
        };

        // Every word ends up in a symbol name, so its camel form must be
        // usable as an identifier ("---" leaves nothing, "2fa" starts badly).
        if words.iter().any(|w| !is_identifier(&to_camel_case(w))) {
            return Err(invalid(
                "each word must start with a letter and use only letters, digits, `-` or `_`",
            ));
        }

        let derived = match words.as_slice() {
            [] => return Err(invalid("name is required")),
            [name] => Self {
                pascal_name: to_pascal_case(name),
                camel_name: to_camel_case(name),
                kebab_route: to_kebab_case(name),
                module_path: target.join(to_camel_case(name))?,
                import_depth: Self::FLAT_DEPTH,
            },
            [domain, action] => Self {
                pascal_name: to_pascal_case(&format!("{domain} {action}")),
                camel_name: to_camel_case(action),
                kebab_route: format!("{}/{}", to_kebab_case(domain), to_kebab_case(action)),
                module_path: target.join(to_camel_case(domain))?.join(to_camel_case(action))?,
                import_depth: Self::NESTED_DEPTH,
            },
            _ => {
                return Err(invalid(
                    "use either \"name\" or \"domain action\" (at most two words)",
                ));
            }
        };

        Ok(derived)
    }

    /// `../` repeated [`Self::import_depth`] times.
    pub fn relative_root(&self) -> String {
        "../".repeat(self.import_depth)
    }

    /// Full route, e.g. `/api/auth/login`.
    pub fn route(&self) -> String {
        format!("/api/{}", self.kebab_route)
    }
}
