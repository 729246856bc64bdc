//! Literal rendering.
//!
//! The same textual forms are used when a list is printed by `say` and when an
//! expression is echoed back inside an error message, so both the IR and the
//! evaluator go through these helpers.

/// Render a float so it always reads as a float (`3.0`, `2.5`, `1e20`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Debug formatting is the shortest round-trip form and keeps the `.0`.
    format!("{value:?}")
}

/// Render a string as a quoted literal.
///
/// Single quotes are preferred; double quotes are used when the text holds a
/// single quote but no double quote, so the common case needs no escapes.
pub fn quote_str(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
