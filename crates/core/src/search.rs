//! Name search helpers.
//!
//! Search is a case-insensitive substring match. Both store adapters go
//! through these helpers so they agree on what matches.

/// Escape `\`, `%` and `_` so the term matches literally inside a
/// PostgreSQL `LIKE`/`ILIKE` pattern using the default `\` escape.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build an `ILIKE` pattern matching names that contain `term`.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

/// In-process equivalent of `name ILIKE '%term%'`.
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}
