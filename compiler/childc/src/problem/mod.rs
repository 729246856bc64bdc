//! Conversion of interpreter problems into diagnostics.
//!
//! Lives in `childc` because neither `child_eval` nor `child_parse` depends
//! on `child_diagnostic`'s rendering side; the codes come from the errors
//! themselves.

use child_diagnostic::{Diagnostic, ErrorCode};
use child_eval::errors::syntax_code;
use child_eval::{EvalError, EvalErrorKind, ExprFault};
use child_parse::{Finding, FindingKind, Program, SyntaxError};

/// Commands a line may start with, for unknown-command help.
const COMMANDS: &str =
    "say, remember, list, add, get item, size of, ask, if, repeat, count, for each, learn how to, do";

/// Convert a failed run into a diagnostic pointing at the failing line.
pub fn eval_error_to_diagnostic(err: &EvalError, program: &Program) -> Diagnostic {
    let diag = match &err.kind {
        EvalErrorKind::Syntax(syntax) => syntax_diagnostic(syntax),
        kind => {
            let mut diag = Diagnostic::error(kind.code()).with_message(kind.to_string());
            for note in notes_for_kind(kind) {
                diag = diag.with_note(note);
            }
            if let Some(suggestion) = suggestion_for_kind(kind) {
                diag = diag.with_suggestion(suggestion);
            }
            diag
        }
    };
    at_line(diag, err.line, program).with_label(label_for_kind(&err.kind))
}

/// Convert a `child check` finding into a diagnostic.
pub fn finding_to_diagnostic(finding: &Finding, program: &Program) -> Diagnostic {
    let diag = match &finding.kind {
        FindingKind::Syntax(syntax) => syntax_diagnostic(syntax),
        FindingKind::Unterminated { .. } => Diagnostic::error(ErrorCode::E1003)
            .with_message(finding.kind.to_string())
            .with_suggestion("add a line with just 'end' after the last line of the block"),
        FindingKind::StrayEnd => Diagnostic::warning(ErrorCode::W1001)
            .with_message(finding.kind.to_string())
            .with_suggestion("remove this line, or check the block above for an extra 'end'"),
        FindingKind::StrayOtherwise => Diagnostic::warning(ErrorCode::W1002)
            .with_message(finding.kind.to_string()),
        FindingKind::DuplicateOtherwise => Diagnostic::warning(ErrorCode::W1003)
            .with_message(finding.kind.to_string())
            .with_note("only the first 'otherwise' of an 'if' is used"),
    };
    let label = match &finding.kind {
        FindingKind::Syntax(err) => syntax_label(err),
        FindingKind::Unterminated { .. } => "block opened here",
        FindingKind::StrayEnd => "nothing to close",
        FindingKind::StrayOtherwise | FindingKind::DuplicateOtherwise => "ignored",
    };
    at_line(diag, finding.line, program).with_label(label)
}

fn at_line(diag: Diagnostic, line: usize, program: &Program) -> Diagnostic {
    match line.checked_sub(1).and_then(|index| program.line(index)) {
        Some(source) => diag.with_line(line, source.text.clone()),
        None => diag.with_note(format!("on line {line}")),
    }
}

fn syntax_diagnostic(err: &SyntaxError) -> Diagnostic {
    let code = syntax_code(err);
    match err {
        SyntaxError::UnknownCommand { .. } => Diagnostic::error(code)
            .with_message(err.to_string())
            .with_note(format!("lines start with one of: {COMMANDS}"))
            .with_suggestion("use '//' at the start of a line to write a comment"),
        SyntaxError::Malformed { usage, .. } => Diagnostic::error(code)
            .with_message("this statement is missing a part or has one too many")
            .with_suggestion(usage.to_string()),
        SyntaxError::InvalidName { .. } => Diagnostic::error(code)
            .with_message(err.to_string())
            .with_note("names start with a letter or _ and contain no spaces"),
        SyntaxError::UnrecognizedCondition { .. } => Diagnostic::error(code)
            .with_message(err.to_string())
            .with_note("conditions use 'is', 'is not', 'is bigger than' or 'is smaller than'"),
        SyntaxError::DuplicateParameter { .. } | SyntaxError::Expression { .. } => {
            Diagnostic::error(code).with_message(err.to_string())
        }
    }
}

fn syntax_label(err: &SyntaxError) -> &'static str {
    match err {
        SyntaxError::UnknownCommand { .. } => "unknown command",
        SyntaxError::Malformed { .. } => "malformed statement",
        SyntaxError::InvalidName { .. } | SyntaxError::DuplicateParameter { .. } => "bad name",
        SyntaxError::UnrecognizedCondition { .. } => "no comparison found",
        SyntaxError::Expression { .. } => "can't read this expression",
    }
}

/// Produce a concise label for the failing line.
fn label_for_kind(kind: &EvalErrorKind) -> &'static str {
    match kind {
        EvalErrorKind::Syntax(err) => syntax_label(err),
        EvalErrorKind::Block(_) => "block opened here",
        EvalErrorKind::Unevaluable { fault, .. } => match fault {
            ExprFault::UndefinedName { .. } => "name not found",
            ExprFault::DivisionByZero => "division by zero here",
            ExprFault::Overflow { .. } => "number too large",
            _ => "can't evaluate",
        },
        EvalErrorKind::IndexOutOfRange { .. } => "no such item",
        EvalErrorKind::UndefinedList { .. } => "list not found",
        EvalErrorKind::NotAList { .. } => "not a list",
        EvalErrorKind::UnknownProcedure { .. } => "procedure not found",
        EvalErrorKind::ArityMismatch { .. } => "wrong number of values",
        EvalErrorKind::TypeMismatch { .. } | EvalErrorKind::Incomparable { .. } => {
            "mismatched types"
        }
        EvalErrorKind::RecursionLimit { .. } => "recursion limit exceeded",
        EvalErrorKind::InputUnavailable { .. } => "waiting for input",
        EvalErrorKind::InputFailed { .. } => "reading input",
    }
}

fn notes_for_kind(kind: &EvalErrorKind) -> Vec<String> {
    match kind {
        EvalErrorKind::IndexOutOfRange { len, .. } if *len > 0 => vec![format!(
            "positions start at 0, so the last item is at {}",
            len - 1
        )],
        EvalErrorKind::IndexOutOfRange { .. } => vec!["the list is empty".to_string()],
        EvalErrorKind::InputUnavailable { .. } => {
            vec!["the input ended before this question could be answered".to_string()]
        }
        EvalErrorKind::InputFailed { .. } => {
            vec!["answers must be plain text, one per line".to_string()]
        }
        _ => Vec::new(),
    }
}

/// Produce an actionable suggestion for fixable errors.
fn suggestion_for_kind(kind: &EvalErrorKind) -> Option<String> {
    match kind {
        EvalErrorKind::Block(_) => Some(
            "add a line with just 'end' after the last line of the block".to_string(),
        ),
        EvalErrorKind::Unevaluable { fault, .. } => match fault {
            ExprFault::UndefinedName { name } => {
                Some(format!("give '{name}' a value first, e.g. 'remember 0 as {name}'"))
            }
            ExprFault::DivisionByZero => {
                Some("check that the number is not 0 before dividing".to_string())
            }
            _ => None,
        },
        EvalErrorKind::UndefinedList { name } => {
            Some(format!("create it first, e.g. 'list [] as {name}'"))
        }
        EvalErrorKind::UnknownProcedure { name } => {
            Some(format!("teach it first with 'learn how to {name}'"))
        }
        EvalErrorKind::RecursionLimit { .. } => Some(
            "make sure the procedure stops calling itself, or raise the limit with --max-depth"
                .to_string(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
