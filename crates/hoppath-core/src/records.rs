//! Utilities for records output format

/// Escape a string for embedding in a quoted records field.
/// Backslashes are doubled first, then `"` becomes `\"`.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

/// Render a node id as a single records field.
/// Ids that are empty or contain whitespace, `=`, `"` or `\` are quoted.
pub fn record_value(s: &str) -> String {
    let needs_quotes = s.is_empty()
        || s.chars()
            .any(|c| c.is_whitespace() || matches!(c, '=' | '"' | '\\'));
    if needs_quotes {
        format!("\"{}\"", escape_quotes(s))
    } else {
        s.to_string()
    }
}
