//! Diagnostic Emitters
//!
//! Provides different output formats for diagnostics:
//! - Terminal: Colored, human-readable output with a source snippet
//! - JSON: Machine-readable output for tooling
//!
//! Each emitter implements the `DiagnosticEmitter` trait.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::fmt::Write;

use crate::Diagnostic;

/// Returns a trailing comma for JSON list serialization.
///
/// Returns `","` when `index` is not the last element, `""` otherwise.
pub(crate) fn trailing_comma(index: usize, total: usize) -> &'static str {
    if index + 1 < total {
        ","
    } else {
        ""
    }
}

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Escape a string for JSON output.
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}
