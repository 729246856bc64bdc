use super::*;
use child_diagnostic::Severity;
use child_parse::check;
use pretty_assertions::assert_eq;

fn program(src: &str) -> Program {
    Program::parse(src)
}

#[test]
fn eval_error_points_at_the_failing_line() {
    let program = program("say 1\ndo fly");
    let err = EvalErrorKind::UnknownProcedure { name: "fly".into() }.at(2);
    let diag = eval_error_to_diagnostic(&err, &program);

    assert_eq!(diag.code, ErrorCode::E2005);
    assert_eq!(diag.message, "I don't know how to 'fly'");
    assert_eq!(diag.line(), Some(2));
    assert_eq!(
        diag.location.as_ref().map(|l| l.text.as_str()),
        Some("do fly")
    );
    assert_eq!(
        diag.location.as_ref().and_then(|l| l.label.as_deref()),
        Some("procedure not found")
    );
    assert_eq!(diag.suggestions, vec!["teach it first with 'learn how to fly'"]);
}

#[test]
fn malformed_statement_suggests_the_usage() {
    let program = program("remember 5");
    let err = EvalErrorKind::Syntax(SyntaxError::Malformed {
        usage: child_parse::Usage::Remember,
        text: "remember 5".into(),
    })
    .at(1);
    let diag = eval_error_to_diagnostic(&err, &program);
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.suggestions, vec!["use 'remember VALUE as NAME'"]);
}

#[test]
fn unreadable_input_is_reported_as_its_own_cause() {
    let program = program("ask \"Name?\" and remember it as n");
    let err = EvalErrorKind::InputFailed {
        prompt: "'Name?'".into(),
        reason: "stream did not contain valid UTF-8".into(),
    }
    .at(1);
    let diag = eval_error_to_diagnostic(&err, &program);
    assert_eq!(diag.code, ErrorCode::E2009);
    assert_eq!(
        diag.message,
        "couldn't read the answer to 'Name?': stream did not contain valid UTF-8"
    );
    assert_eq!(
        diag.location.as_ref().and_then(|l| l.label.as_deref()),
        Some("reading input")
    );
    assert_eq!(diag.notes, vec!["answers must be plain text, one per line"]);
}

#[test]
fn index_errors_explain_positions() {
    let program = program("list [1, 2] as L\nget item 5 from L as x");
    let err = EvalErrorKind::IndexOutOfRange {
        target: "L".into(),
        index: 5,
        len: 2,
    }
    .at(2);
    let diag = eval_error_to_diagnostic(&err, &program);
    assert_eq!(diag.code, ErrorCode::E2002);
    assert_eq!(
        diag.notes,
        vec!["positions start at 0, so the last item is at 1"]
    );
}

#[test]
fn line_outside_the_program_becomes_a_note() {
    let err = EvalErrorKind::RecursionLimit { limit: 3 }.at(40);
    let diag = eval_error_to_diagnostic(&err, &program("say 1"));
    assert_eq!(diag.line(), None);
    assert_eq!(diag.notes, vec!["on line 40"]);
}

#[test]
fn findings_become_errors_and_warnings() {
    let program = program("end\nrepeat 2 times\nshout 1");
    let diags: Vec<Diagnostic> = check(&program)
        .iter()
        .map(|f| finding_to_diagnostic(f, &program))
        .collect();
    let summary: Vec<(ErrorCode, Severity, Option<usize>)> = diags
        .iter()
        .map(|d| (d.code, d.severity, d.line()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (ErrorCode::W1001, Severity::Warning, Some(1)),
            (ErrorCode::E1003, Severity::Error, Some(2)),
            (ErrorCode::E1001, Severity::Error, Some(3)),
        ]
    );
}
