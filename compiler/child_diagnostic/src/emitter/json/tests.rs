use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn render(diagnostics: &[Diagnostic], path: Option<&str>) -> String {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    if let Some(path) = path {
        emitter = emitter.with_path(path);
    }
    emitter.begin();
    emitter.emit_all(diagnostics);
    emitter.end();
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_empty_array() {
    assert_eq!(render(&[], None), "[]\n");
}

#[test]
fn test_single_diagnostic() {
    let diag = Diagnostic::error(ErrorCode::E2006)
        .with_message("'add' needs 2 values but got 1")
        .with_line(9, "do add with 5")
        .with_suggestion("write 'do add with A and B'");
    assert_eq!(
        render(&[diag], Some("math.child")),
        r#"[
  {
    "code": "E2006",
    "severity": "error",
    "message": "'add' needs 2 values but got 1",
    "file": "math.child",
    "line": 9,
    "text": "do add with 5",
    "label": null,
    "notes": [
    ],
    "suggestions": [
      "write 'do add with A and B'"
    ]
  }
]
"#
    );
}

#[test]
fn test_escapes_and_separators() {
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E2001).with_message("can't evaluate \"x\""),
        Diagnostic::warning(ErrorCode::W1001).with_message("stray end"),
    ];
    let text = render(&diagnostics, None);
    assert!(text.contains(r#""message": "can't evaluate \"x\"""#), "{text}");
    assert!(text.contains("  },\n  {"), "{text}");
    assert!(text.contains(r#""severity": "warning""#), "{text}");
    assert!(text.contains(r#""line": null"#), "{text}");
}
