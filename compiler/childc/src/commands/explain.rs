//! The `explain` command: display documentation for error codes.

use std::process::ExitCode;

use child_diagnostic::{ErrorCode, ErrorDocs};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) -> ExitCode {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX (errors) or WXXXX (warnings) where X is a digit.");
        eprintln!("Examples: E1001, E2002, W1001");
        return ExitCode::FAILURE;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
        ExitCode::SUCCESS
    } else {
        eprintln!("No documentation available for {code_str}");
        ExitCode::FAILURE
    }
}
