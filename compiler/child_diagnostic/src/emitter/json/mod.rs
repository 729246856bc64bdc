//! JSON Emitter
//!
//! Machine-readable diagnostic output in JSON format.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, trailing_comma, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
///
/// Call [`begin`](Self::begin) before the first diagnostic and
/// [`end`](Self::end) after the last to get a well-formed array.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    path: Option<String>,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            path: None,
        }
    }

    /// Record the source file in every diagnostic.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }

    fn write_string_list(&mut self, key: &str, items: &[String], last: bool) {
        let _ = writeln!(self.writer, "    \"{key}\": [");
        for (i, item) in items.iter().enumerate() {
            let comma = trailing_comma(i, items.len());
            let _ = writeln!(self.writer, "      \"{}\"{comma}", escape_json(item));
        }
        let _ = writeln!(self.writer, "    ]{}", if last { "" } else { "," });
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if self.first {
            let _ = writeln!(self.writer);
        } else {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        // Built by hand to keep serde out of the dependency tree.
        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(
            self.writer,
            "    \"code\": \"{}\",",
            diagnostic.code.as_str()
        );
        let _ = writeln!(self.writer, "    \"severity\": \"{}\",", diagnostic.severity);
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&diagnostic.message)
        );
        if let Some(path) = &self.path {
            let _ = writeln!(self.writer, "    \"file\": \"{}\",", escape_json(path));
        }
        match &diagnostic.location {
            Some(location) => {
                let _ = writeln!(self.writer, "    \"line\": {},", location.line);
                let _ = writeln!(
                    self.writer,
                    "    \"text\": \"{}\",",
                    escape_json(&location.text)
                );
                match &location.label {
                    Some(label) => {
                        let _ = writeln!(self.writer, "    \"label\": \"{}\",", escape_json(label));
                    }
                    None => {
                        let _ = writeln!(self.writer, "    \"label\": null,");
                    }
                }
            }
            None => {
                let _ = writeln!(self.writer, "    \"line\": null,");
            }
        }
        self.write_string_list("notes", &diagnostic.notes, false);
        self.write_string_list("suggestions", &diagnostic.suggestions, true);
        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // The array itself is the summary.
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
