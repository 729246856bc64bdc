//! Command handlers for the `child` CLI.
//!
//! Each submodule implements one command. Shared pieces (reading the source
//! file, the diagnostic reporter) live here in the module root.

use std::io::{self, IsTerminal, Stderr};

use child_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use child_diagnostic::Diagnostic;

use crate::options::{Options, OutputFormat};

mod check;
mod demo;
mod explain;
mod run;

pub use check::check_file;
pub use demo::{run_demo, DEMO_SOURCE};
pub use explain::explain_error;
pub use run::{run_file, run_source};

/// Read a source file, reporting failure on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            eprintln!("error: could not read '{path}': {err}");
            None
        }
    }
}

/// Diagnostic output in the format chosen on the command line.
pub(crate) enum Reporter {
    Terminal(TerminalEmitter<Stderr>),
    Json(JsonEmitter<Stderr>),
}

impl Reporter {
    pub(crate) fn new(options: &Options, path: &str) -> Self {
        match options.format {
            OutputFormat::Text => {
                let is_tty = io::stderr().is_terminal();
                Reporter::Terminal(TerminalEmitter::stderr(options.color, is_tty).with_path(path))
            }
            OutputFormat::Json => {
                let mut emitter = JsonEmitter::new(io::stderr()).with_path(path);
                emitter.begin();
                Reporter::Json(emitter)
            }
        }
    }

    pub(crate) fn emit(&mut self, diagnostic: &Diagnostic) {
        match self {
            Reporter::Terminal(e) => e.emit(diagnostic),
            Reporter::Json(e) => e.emit(diagnostic),
        }
    }

    /// Write the summary (text) or close the array (JSON), then flush.
    pub(crate) fn finish(mut self, errors: usize, warnings: usize) {
        match &mut self {
            Reporter::Terminal(e) => {
                e.emit_summary(errors, warnings);
                e.flush();
            }
            Reporter::Json(e) => {
                e.end();
                e.flush();
            }
        }
    }
}
