//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E2002]: item 5 doesn't exist in list 'L'
//!   --> shopping.child:3
//!    |
//!  3 | get item 5 from L as x
//!    | ^^^^^^^^^^^^^^^^^^^^^^ 'L' has 2 items
//!    |
//!    = help: items are counted from 0
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    /// Shown in the `-->` line; falls back to `line N`.
    path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            path: None,
        }
    }

    /// Name the source file in location lines.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
            Severity::Help => colors::HELP,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    /// Blank gutter of `width` columns followed by ` |`.
    fn write_gutter(&mut self, width: usize) {
        let _ = write!(self.writer, "{:width$} ", "");
        self.write_colored("|", colors::GUTTER);
    }

    fn write_snippet(
        &mut self,
        line: usize,
        text: &str,
        label: Option<&str>,
        severity: Severity,
    ) {
        let number = line.to_string();
        let width = number.len() + 1;

        self.write_gutter(width);
        let _ = writeln!(self.writer);

        self.write_colored(&format!("{number:>width$} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {text}");

        self.write_gutter(width);
        let marker = "^".repeat(text.chars().count().max(1));
        let color = match severity {
            Severity::Warning => colors::WARNING,
            _ => colors::ERROR,
        };
        let _ = write!(self.writer, " ");
        self.write_colored(&marker, color);
        if let Some(label) = label {
            let _ = write!(self.writer, " ");
            self.write_colored(label, color);
        }
        let _ = writeln!(self.writer);

        self.write_gutter(width);
        let _ = writeln!(self.writer);
    }

    fn write_trailer(&mut self, kind: &str, color: &str, text: &str) {
        let _ = write!(self.writer, "   = ");
        self.write_colored(kind, color);
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(location) = &diagnostic.location {
            let _ = write!(self.writer, "  ");
            self.write_colored("-->", colors::GUTTER);
            match &self.path {
                Some(path) => {
                    let _ = writeln!(self.writer, " {path}:{}", location.line);
                }
                None => {
                    let _ = writeln!(self.writer, " line {}", location.line);
                }
            }
            self.write_snippet(
                location.line,
                &location.text,
                location.label.as_deref(),
                diagnostic.severity,
            );
        }

        for note in &diagnostic.notes {
            self.write_trailer("note", colors::BOLD, note);
        }

        for suggestion in &diagnostic.suggestions {
            self.write_trailer("help", colors::HELP, suggestion);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "1 error".to_string()
            } else {
                format!("{error_count} errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": found {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": found {error_part}");
            }
        } else {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
