//! Character filters for text embedded in Mermaid output.
//!
//! Mermaid is a line-oriented notation where brackets, braces and colons are
//! structural, so anything user-controlled that lands in a node label or an
//! identifier goes through one of these filters first. Characters outside the
//! allowed set are removed, not replaced.

/// Filter for human-readable labels: letters, digits, `_`, space, and the
/// comparison characters `<`, `>`, `=` survive. Everything else is dropped.
#[must_use]
pub fn sanitize_label(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, '_' | ' ' | '<' | '>' | '='))
        .collect()
}

/// Filter for identifiers (participant names, state names): letters, digits
/// and `_` survive.
#[must_use]
pub fn sanitize_ident(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Whether `text` is a plain name: a letter or `_` followed by letters,
/// digits or `_`.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod tests;
