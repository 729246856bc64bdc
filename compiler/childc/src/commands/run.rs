//! The `run` command: execute a CHILD program.

use std::io::Write;
use std::process::ExitCode;

use child_eval::InterpreterBuilder;
use child_parse::Program;

use super::{read_file, Reporter};
use crate::options::Options;
use crate::problem::eval_error_to_diagnostic;

/// Run a CHILD source file.
pub fn run_file(path: &str, options: &Options) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };
    run_source(path, &source, options)
}

/// Run program text, reporting the first error against `name`.
///
/// Everything printed before an error stays printed; the run stops at the
/// error and the exit code is 1.
pub fn run_source(name: &str, source: &str, options: &Options) -> ExitCode {
    let program = Program::parse(source);
    let mut interpreter = InterpreterBuilder::new(program)
        .max_call_depth(options.max_depth)
        .build();

    match interpreter.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(line = err.line, code = %err.code(), "run failed");
            // Program output first, so the report follows it.
            let _ = std::io::stdout().flush();
            let mut reporter = Reporter::new(options, name);
            reporter.emit(&eval_error_to_diagnostic(&err, interpreter.program()));
            reporter.finish(1, 0);
            ExitCode::FAILURE
        }
    }
}
