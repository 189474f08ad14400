//! Name transformations.
//!
//! Converts arbitrary user input into the identifier styles used for
//! generated files, symbols and routes.
//!
//! | Input            | Pascal          | camel           | kebab             |
//! |------------------|-----------------|-----------------|-------------------|
//! | `user profile`   | `UserProfile`   | `userProfile`   | `user-profile`    |
//! | `order_items`    | `OrderItems`    | `orderItems`    | `order-items`     |
//! | `sendEmail`      | `Sendemail`     | `sendemail`     | `send-email`      |
//! | `API`            | `Api`           | `api`           | `api`             |
//!
//! Pascal and camel lower-case everything after the first character of each
//! piece, so inner capitals in the input are not preserved.

fn is_piece_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// Convert a string to PascalCase.
///
/// Splits on every hyphen, underscore and whitespace character. Each piece
/// gets an upper-cased first character and a lower-cased remainder; empty
/// pieces (consecutive separators) contribute nothing.
pub fn to_pascal_case(s: &str) -> String {
    s.split(is_piece_separator)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let mut chars = piece.chars();
            let mut out = String::with_capacity(piece.len());
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
            out
        })
        .collect()
}

/// Convert a string to camelCase: [`to_pascal_case`] with the first
/// character lower-cased.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a string to kebab-case.
///
/// 1. Insert `-` at every ASCII lower→upper boundary (`aB` → `a-B`)
/// 2. Lower-case everything
/// 3. Collapse each run of whitespace/underscores into a single `-`
///
/// Hyphens already present are left alone, so kebab input is returned
/// unchanged. Upper-case runs (`HTTP`) have no lower→upper boundary and
/// stay together.
pub fn to_kebab_case(s: &str) -> String {
    let mut bounded = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && c.is_ascii_uppercase() {
                bounded.push('-');
            }
        }
        bounded.push(c);
        prev = Some(c);
    }

    let lowered = bounded.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut in_run = false;
    for c in lowered.chars() {
        if c == '_' || c.is_whitespace() {
            if !in_run {
                out.push('-');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Whether `s` can be used as a JavaScript identifier: a letter, `_` or `$`
/// followed by letters, digits, `_` or `$`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
