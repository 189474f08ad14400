//! The services registry (`src/services/services.ts`) as a structured document.
//!
//! The registry is a single object literal that use cases receive as their
//! `services` argument. Generators register new services in it, so instead
//! of splicing text at guessed positions the file is parsed into an ordered
//! document, mutated, and serialized back:
//!
//! ```text
//! // Services container                          <- prelude (comments and
//! import { userService } from './user';             imports, in order)
//!
//! export const services = {                      <- object open
//!   // Add your services here                    <- entries (comments and
//!   logger: { ... },                                properties, in order)
//!   user: userService, // main
//! };                                             <- object close
//!
//! export type Services = typeof services;        <- trailer (verbatim)
//! ```
//!
//! Rendering normalizes whitespace: blank lines in the prelude and the object
//! body are dropped, and a single blank line follows the prelude when it has
//! imports. Comment and import order is kept.
//!
//! Anything that does not fit this shape is a [`DomainError::MalformedRegistry`]
//! rather than a silently skipped edit.

use std::fmt;

use crate::domain::{error::DomainError, naming::is_identifier};

/// Registry location, relative to the project root.
pub const REGISTRY_PATH: &str = "src/services/services.ts";

const OBJECT_OPEN: &str = "export const services = {";
const OBJECT_CLOSE: &str = "};";

/// `import { a, b } from './source';`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    pub names: Vec<String>,
    pub source: String,
}

impl ImportBinding {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            source: source.into(),
        }
    }

    fn parse(line: &str) -> Option<Self> {
        let rest = line.trim().strip_prefix("import")?.trim_start();
        let rest = rest.strip_prefix('{')?;
        let (names, rest) = rest.split_once('}')?;
        let source = rest.trim().strip_prefix("from")?.trim();
        let source = source.strip_suffix(';').unwrap_or(source).trim();
        let source = strip_quotes(source)?;

        let names: Vec<String> = names
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from)
            .collect();
        if names.is_empty() {
            return None;
        }

        Some(Self {
            names,
            source: source.to_string(),
        })
    }

    fn binds(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl fmt::Display for ImportBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "import {{ {} }} from '{}';",
            self.names.join(", "),
            self.source
        )
    }
}

fn strip_quotes(s: &str) -> Option<&str> {
    ['\'', '"']
        .iter()
        .find_map(|q| s.strip_prefix(*q).and_then(|s| s.strip_suffix(*q)))
}

/// One line of the file above the services object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreludeLine {
    /// A `//` comment, stored trimmed.
    Comment(String),
    Import(ImportBinding),
}

/// One line-level element of the services object body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEntry {
    /// A `//` comment, stored trimmed.
    Comment(String),
    /// `key: value`. Multi-line values keep their inner lines verbatim,
    /// without the trailing comma. A `//` comment after the value is kept
    /// apart so it can be re-emitted after the comma.
    Property {
        key: String,
        value: String,
        comment: Option<String>,
    },
}

/// What [`ServiceRegistry::register_service`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryChange {
    /// The import, the property, or both were added.
    Added,
    /// Import and property were already present.
    Unchanged,
    /// The key is taken by another value; nothing was added.
    KeyConflict { key: String, existing: String },
}

impl RegistryChange {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Parsed services registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRegistry {
    prelude: Vec<PreludeLine>,
    entries: Vec<RegistryEntry>,
    trailer: Vec<String>,
}

impl ServiceRegistry {
    /// The registry a freshly scaffolded project starts with.
    pub fn scaffold_default() -> Self {
        Self {
            prelude: vec![PreludeLine::Comment("// Services container".into())],
            entries: vec![
                RegistryEntry::Comment("// Add your services here".into()),
                RegistryEntry::Property {
                    key: "logger".into(),
                    value: [
                        "{",
                        "    info: (message: string) => console.log(message),",
                        "    error: (message: string) => console.error(message),",
                        "  }",
                    ]
                    .join("\n"),
                    comment: None,
                },
            ],
            trailer: vec![
                String::new(),
                "export type Services = typeof services;".into(),
            ],
        }
    }

    pub fn parse(source: &str) -> Result<Self, DomainError> {
        let lines: Vec<&str> = source.lines().collect();
        let malformed = |index: usize, reason: &str| DomainError::MalformedRegistry {
            line: index + 1,
            reason: reason.to_string(),
        };

        let mut prelude = Vec::new();
        let mut cursor = 0;

        // ── prelude: comments and imports up to the object literal ────────
        loop {
            let Some(line) = lines.get(cursor) else {
                return Err(malformed(cursor, "missing `export const services = {`"));
            };
            let trimmed = line.trim();
            cursor += 1;

            if trimmed == OBJECT_OPEN {
                break;
            } else if trimmed.is_empty() {
                continue;
            } else if trimmed.starts_with("//") {
                prelude.push(PreludeLine::Comment(trimmed.to_string()));
            } else if trimmed.starts_with("import") {
                let binding = ImportBinding::parse(trimmed)
                    .ok_or_else(|| malformed(cursor - 1, "expected `import { name } from '...';`"))?;
                prelude.push(PreludeLine::Import(binding));
            } else {
                return Err(malformed(
                    cursor - 1,
                    "unexpected statement before the services object",
                ));
            }
        }

        // ── object body ───────────────────────────────────────────────────
        let mut entries = Vec::new();
        let mut open: Option<(String, Vec<String>, i32, usize)> = None;
        let mut closed = false;

        while let Some(line) = lines.get(cursor) {
            let index = cursor;
            cursor += 1;

            if let Some((key, mut value_lines, depth, start)) = open.take() {
                let depth = depth + bracket_delta(line);
                if depth < 0 {
                    return Err(malformed(index, "unbalanced brackets"));
                }
                if depth == 0 {
                    let (code, comment) = split_comment(line.trim_end());
                    value_lines.push(code.to_string());
                    entries.push(RegistryEntry::Property {
                        key,
                        value: strip_trailing_comma(&value_lines.join("\n")),
                        comment: comment.map(String::from),
                    });
                } else {
                    value_lines.push(line.trim_end().to_string());
                    open = Some((key, value_lines, depth, start));
                }
                continue;
            }

            let trimmed = line.trim();
            if trimmed == OBJECT_CLOSE {
                closed = true;
                break;
            } else if trimmed.is_empty() {
                continue;
            } else if trimmed.starts_with("//") {
                entries.push(RegistryEntry::Comment(trimmed.to_string()));
                continue;
            }

            let (key, value) = trimmed
                .split_once(':')
                .ok_or_else(|| malformed(index, "expected `key: value`"))?;
            let key = key.trim();
            if !is_identifier(key) {
                return Err(malformed(index, "property key is not an identifier"));
            }
            let value = value.trim();
            let depth = bracket_delta(value);
            if depth < 0 {
                return Err(malformed(index, "unbalanced brackets"));
            }
            if depth == 0 {
                let (code, comment) = split_comment(value);
                let code = strip_trailing_comma(code);
                if code.is_empty() {
                    return Err(malformed(index, "property has no value"));
                }
                entries.push(RegistryEntry::Property {
                    key: key.to_string(),
                    value: code,
                    comment: comment.map(String::from),
                });
            } else {
                open = Some((key.to_string(), vec![value.to_string()], depth, index));
            }
        }

        if let Some((_, _, _, start)) = open {
            return Err(malformed(start, "property value is never closed"));
        }
        if !closed {
            return Err(malformed(lines.len(), "services object is never closed with `};`"));
        }

        let trailer = lines[cursor..].iter().map(|l| l.to_string()).collect();

        Ok(Self {
            prelude,
            entries,
            trailer,
        })
    }

    /// Serialize deterministically. `parse(render())` yields an equal document.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.prelude {
            match line {
                PreludeLine::Comment(comment) => out.push_str(comment),
                PreludeLine::Import(import) => out.push_str(&import.to_string()),
            }
            out.push('\n');
        }
        if self.imports().next().is_some() {
            out.push('\n');
        }

        out.push_str(OBJECT_OPEN);
        out.push('\n');
        for entry in &self.entries {
            match entry {
                RegistryEntry::Comment(comment) => {
                    out.push_str("  ");
                    out.push_str(comment);
                }
                RegistryEntry::Property {
                    key,
                    value,
                    comment,
                } => {
                    out.push_str(&format!("  {key}: {value},"));
                    if let Some(comment) = comment {
                        out.push(' ');
                        out.push_str(comment);
                    }
                }
            }
            out.push('\n');
        }
        out.push_str(OBJECT_CLOSE);
        out.push('\n');

        for line in &self.trailer {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Add an import unless some binding already imports `name` from `source`.
    ///
    /// New imports go right after the last existing one, or at the end of the
    /// prelude when there is none.
    pub fn add_import(&mut self, binding: ImportBinding) -> bool {
        let present = self.imports().any(|existing| {
            existing.source == binding.source && binding.names.iter().all(|n| existing.binds(n))
        });
        if present {
            return false;
        }
        let at = self
            .prelude
            .iter()
            .rposition(|line| matches!(line, PreludeLine::Import(_)))
            .map_or(self.prelude.len(), |last| last + 1);
        self.prelude.insert(at, PreludeLine::Import(binding));
        true
    }

    /// Append a property unless the key is already taken.
    pub fn add_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.property(&key).is_some() {
            return false;
        }
        self.entries.push(RegistryEntry::Property {
            key,
            value: value.into(),
            comment: None,
        });
        true
    }

    /// Register `<camel>Service` from `./<camel>` under key `<camel>`.
    ///
    /// The key is checked first: if it already holds a different value the
    /// document is left untouched.
    pub fn register_service(&mut self, camel_name: &str) -> RegistryChange {
        let instance = format!("{camel_name}Service");
        if let Some(existing) = self.property(camel_name) {
            if existing != instance {
                return RegistryChange::KeyConflict {
                    key: camel_name.to_string(),
                    existing: existing.to_string(),
                };
            }
        }

        let import_added =
            self.add_import(ImportBinding::new(instance.clone(), format!("./{camel_name}")));
        let property_added = self.add_property(camel_name, instance);
        if import_added || property_added {
            RegistryChange::Added
        } else {
            RegistryChange::Unchanged
        }
    }

    pub fn imports(&self) -> impl Iterator<Item = &ImportBinding> {
        self.prelude.iter().filter_map(|line| match line {
            PreludeLine::Import(import) => Some(import),
            PreludeLine::Comment(_) => None,
        })
    }

    pub fn prelude(&self) -> &[PreludeLine] {
        &self.prelude
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.entries.iter().find_map(|e| match e {
            RegistryEntry::Property { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::scaffold_default()
    }
}

fn strip_trailing_comma(value: &str) -> String {
    let value = value.trim_end();
    value.strip_suffix(',').unwrap_or(value).trim_end().to_string()
}

/// Walk one line outside string literals, returning the net bracket depth
/// change and the byte offset of a trailing `//` comment, if any.
fn scan(line: &str) -> (i32, Option<usize>) {
    let mut depth = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev_slash = false;

    for (i, c) in line.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '/' if prev_slash => return (depth, Some(i - 1)),
            '\'' | '"' | '`' => quote = Some(c),
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth -= 1,
            _ => {}
        }
        prev_slash = c == '/';
    }
    (depth, None)
}

/// Net bracket depth change over one line, ignoring string contents and
/// `//` comments.
fn bracket_delta(line: &str) -> i32 {
    scan(line).0
}

/// Split `line` into its code and a trailing `//` comment.
fn split_comment(line: &str) -> (&str, Option<&str>) {
    match scan(line).1 {
        Some(at) => (line[..at].trim_end(), Some(line[at..].trim_end())),
        None => (line, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STUB: &str = "// Services container
export const services = {
  // Add your services here
  logger: {
    info: (message: string) => console.log(message),
    error: (message: string) => console.error(message),
  },
};

export type Services = typeof services;
";

    #[test]
    fn default_renders_scaffold_stub() {
        assert_eq!(ServiceRegistry::scaffold_default().render(), STUB);
    }

    #[test]
    fn parse_round_trips_stub() {
        let registry = ServiceRegistry::parse(STUB).unwrap();
        assert_eq!(registry, ServiceRegistry::scaffold_default());
        assert_eq!(registry.render(), STUB);
    }

    #[test]
    fn register_service_adds_import_and_property() {
        let mut registry = ServiceRegistry::parse(STUB).unwrap();
        assert_eq!(registry.register_service("userProfile"), RegistryChange::Added);

        let rendered = registry.render();
        assert!(rendered.contains(
            "// Services container\nimport { userProfileService } from './userProfile';\n\nexport const services = {"
        ));
        assert!(rendered.contains("  },\n  userProfile: userProfileService,\n};"));
    }

    #[test]
    fn register_service_is_idempotent() {
        let mut registry = ServiceRegistry::parse(STUB).unwrap();
        registry.register_service("userProfile");
        let once = registry.render();

        let mut reparsed = ServiceRegistry::parse(&once).unwrap();
        assert_eq!(
            reparsed.register_service("userProfile"),
            RegistryChange::Unchanged
        );

        let twice = reparsed.render();
        assert_eq!(once, twice);
        assert_eq!(twice.matches("import { userProfileService }").count(), 1);
        assert_eq!(twice.matches("userProfile: userProfileService").count(), 1);
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = ServiceRegistry::parse(STUB).unwrap();
        registry.register_service("user");
        registry.register_service("billing");

        let keys: Vec<&str> = registry
            .entries()
            .iter()
            .filter_map(|e| match e {
                RegistryEntry::Property { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(keys, ["logger", "user", "billing"]);
        let sources: Vec<&str> = registry.imports().map(|i| i.source.as_str()).collect();
        assert_eq!(sources, ["./user", "./billing"]);
    }

    #[test]
    fn tolerates_formatting_drift() {
        let drifted = "// Services container\n\
            import {userService} from \"./user\"\n\
            \n\
            export const services = {\n\
            \x20   logger: { info: (m: string) => console.log(m) },\n\
            \n\
            \x20   user: userService\n\
            };\n";
        let mut registry = ServiceRegistry::parse(drifted).unwrap();
        assert_eq!(registry.property("user"), Some("userService"));
        assert_eq!(registry.register_service("user"), RegistryChange::Unchanged);
        assert!(registry.register_service("mail").is_added());
    }

    #[test]
    fn taken_key_is_a_conflict_and_leaves_document_untouched() {
        let mut registry = ServiceRegistry::scaffold_default();
        match registry.register_service("logger") {
            RegistryChange::KeyConflict { key, existing } => {
                assert_eq!(key, "logger");
                assert!(existing.starts_with('{'));
            }
            other => panic!("unexpected change: {other:?}"),
        }
        assert_eq!(registry, ServiceRegistry::scaffold_default());
        assert!(!registry.render().contains("loggerService"));
    }

    #[test]
    fn matching_property_without_import_gets_the_import() {
        let source = "export const services = {\n  user: userService,\n};\n";
        let mut registry = ServiceRegistry::parse(source).unwrap();
        assert_eq!(registry.register_service("user"), RegistryChange::Added);
        assert_eq!(registry.imports().count(), 1);
        assert_eq!(registry.render().matches("user: userService").count(), 1);
    }

    #[test]
    fn trailing_comments_stay_after_the_comma() {
        let source = "export const services = {\n  user: userService // main\n  audit: { log: () => 0 }, // kept\n};\n";
        let mut registry = ServiceRegistry::parse(source).unwrap();
        assert_eq!(registry.property("user"), Some("userService"));
        assert_eq!(registry.property("audit"), Some("{ log: () => 0 }"));

        registry.register_service("mail");
        let rendered = registry.render();
        assert!(rendered.contains("  user: userService, // main\n"));
        assert!(rendered.contains("  audit: { log: () => 0 }, // kept\n"));
        assert!(rendered.contains("  mail: mailService,\n};"));

        let reparsed = ServiceRegistry::parse(&rendered).unwrap();
        assert_eq!(reparsed, registry);
        assert_eq!(reparsed.render(), rendered);
    }

    #[test]
    fn comment_after_multi_line_value_is_kept() {
        let source = "export const services = {\n  logger: {\n    info: () => 0,\n  }, // console\n};\n";
        let mut registry = ServiceRegistry::parse(source).unwrap();
        assert_eq!(registry.property("logger"), Some("{\n    info: () => 0,\n  }"));

        registry.register_service("mail");
        let rendered = registry.render();
        assert!(rendered.contains("  }, // console\n  mail: mailService,"));
        assert_eq!(ServiceRegistry::parse(&rendered).unwrap(), registry);
    }

    #[test]
    fn comment_only_value_is_malformed() {
        let source = "export const services = {\n  user: // later\n};\n";
        assert!(matches!(
            ServiceRegistry::parse(source),
            Err(DomainError::MalformedRegistry { line: 2, .. })
        ));
    }

    #[test]
    fn prelude_comments_keep_their_place() {
        let source = "// Services container\n\
            // core\n\
            import { userService } from './user';\n\
            // billing\n\
            import { invoiceService } from './invoice';\n\
            \n\
            export const services = {\n\
            \x20 user: userService,\n\
            \x20 invoice: invoiceService,\n\
            };\n";
        let mut registry = ServiceRegistry::parse(source).unwrap();
        assert_eq!(registry.render(), source);

        registry.register_service("mail");
        assert!(registry.render().starts_with(
            "// Services container\n// core\nimport { userService } from './user';\n// billing\nimport { invoiceService } from './invoice';\nimport { mailService } from './mail';\n\n"
        ));
    }

    #[test]
    fn multi_import_binding_counts_as_present() {
        let source = "import { userService, mailService } from './user';\n\
            export const services = {\n\
            };\n";
        let mut registry = ServiceRegistry::parse(source).unwrap();
        assert!(!registry.add_import(ImportBinding::new("mailService", "./user")));
    }

    #[test]
    fn reports_missing_object() {
        let err = ServiceRegistry::parse("// nothing here\n").unwrap_err();
        assert!(matches!(err, DomainError::MalformedRegistry { .. }));
    }

    #[test]
    fn reports_unclosed_object() {
        let err = ServiceRegistry::parse("export const services = {\n  a: b,\n").unwrap_err();
        assert!(matches!(err, DomainError::MalformedRegistry { line: 2, .. }));
    }

    #[test]
    fn reports_unexpected_statement_with_line() {
        let source = "// Services container\nconst x = 1;\nexport const services = {\n};\n";
        match ServiceRegistry::parse(source).unwrap_err() {
            DomainError::MalformedRegistry { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn brackets_inside_strings_are_ignored() {
        assert_eq!(bracket_delta("info: (m) => console.log('{'),"), 0);
        assert_eq!(bracket_delta("x: { // }"), 1);
    }

    #[test]
    fn comment_markers_inside_strings_are_not_comments() {
        assert_eq!(split_comment("'http://x' // url"), ("'http://x'", Some("// url")));
        assert_eq!(split_comment("a / b"), ("a / b", None));
    }
}
