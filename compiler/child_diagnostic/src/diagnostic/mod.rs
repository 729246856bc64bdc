//! Core diagnostic types.
//!
//! Defines [`Diagnostic`], [`Location`] and [`Severity`]. CHILD programs are
//! line-oriented, so a location is a whole source line rather than a byte span.

use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
            Severity::Help => write!(f, "help"),
        }
    }
}

/// The source line a diagnostic points at.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    /// 1-based line number.
    pub line: usize,
    /// The line's text, shown as the snippet.
    pub text: String,
    /// Message shown under the snippet.
    pub label: Option<String>,
}

/// A diagnostic with all context needed for a readable report.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for `--explain`.
    pub code: ErrorCode,
    pub severity: Severity,
    /// Main error message.
    pub message: String,
    /// Where the problem is, when it belongs to a line.
    pub location: Option<Location>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Text suggestions for fixing the problem.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            location: None,
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point at a source line.
    pub fn with_line(mut self, line: usize, text: impl Into<String>) -> Self {
        self.location = Some(Location {
            line,
            text: text.into(),
            label: None,
        });
        self
    }

    /// Attach a message under the snippet. No effect without a location.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        if let Some(location) = &mut self.location {
            location.label = Some(label.into());
        }
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggestion for fixing the problem.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// The 1-based line number, if any.
    pub fn line(&self) -> Option<usize> {
        self.location.as_ref().map(|l| l.line)
    }

    /// Check if this is an error (vs warning/note).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        if let Some(location) = &self.location {
            write!(f, "\n  --> line {}: {}", location.line, location.text)?;
            if let Some(label) = &location.label {
                write!(f, " ({label})")?;
            }
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}
