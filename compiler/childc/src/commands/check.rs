//! The `check` command: find problems without running the program.

use std::process::ExitCode;

use child_parse::{check, Program};

use super::{read_file, Reporter};
use crate::options::{Options, OutputFormat};
use crate::problem::finding_to_diagnostic;

/// Classify every line and resolve every block of a file.
///
/// Reports all findings, not just the first. Warnings alone do not fail.
pub fn check_file(path: &str, options: &Options) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };
    let program = Program::parse(&source);
    let findings = check(&program);

    let errors = findings.iter().filter(|f| f.is_error()).count();
    let warnings = findings.len() - errors;

    if findings.is_empty() && options.format == OutputFormat::Text {
        println!("{path}: no problems found");
        return ExitCode::SUCCESS;
    }

    let mut reporter = Reporter::new(options, path);
    for finding in &findings {
        reporter.emit(&finding_to_diagnostic(finding, &program));
    }
    reporter.finish(errors, warnings);

    if errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
