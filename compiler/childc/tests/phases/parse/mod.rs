//! Classification, block resolution and static checking.

use child_ir::{CompareOp, Expr, Stmt};
use child_parse::{check, FindingKind, Program, SyntaxError};
use childc::commands::DEMO_SOURCE;
use pretty_assertions::assert_eq;

fn stmt(program: &Program, index: usize) -> &Stmt {
    program.line(index).unwrap().stmt.as_ref().unwrap()
}

#[test]
fn demo_program_is_clean() {
    let program = Program::parse(DEMO_SOURCE);
    assert_eq!(check(&program), vec![]);
}

#[test]
fn indentation_is_ignored() {
    let program = Program::parse("repeat 2 times\n    say 1\nend");
    assert_eq!(
        stmt(&program, 1),
        &Stmt::Say {
            value: Expr::Int(1)
        }
    );
    assert_eq!(program.find_matching_end(0), Ok(2));
}

#[test]
fn three_level_nesting_resolves() {
    let source = "\
if a is 1 then
repeat 2 times
if b is 2 then
say 1
otherwise
say 2
end
end
otherwise
say 3
end";
    let program = Program::parse(source);
    assert_eq!(program.find_matching_end(0), Ok(10));
    assert_eq!(program.find_matching_end(1), Ok(7));
    assert_eq!(program.find_matching_end(2), Ok(6));
    assert_eq!(program.find_otherwise(0), Some(8));
    assert_eq!(program.find_otherwise(2), Some(4));
}

#[test]
fn is_not_wins_over_is() {
    let program = Program::parse("if name is not \"Bob\" then\nend");
    match stmt(&program, 0) {
        Stmt::If { condition } => assert_eq!(condition.op, CompareOp::IsNot),
        other => panic!("expected an if, got {other:?}"),
    }
}

#[test]
fn separators_inside_quotes_are_text() {
    let program = Program::parse("remember \"cats as pets\" as note");
    assert_eq!(
        stmt(&program, 0),
        &Stmt::Remember {
            value: Expr::Str("cats as pets".into()),
            name: "note".into(),
        }
    );
}

#[test]
fn check_reports_everything_in_line_order() {
    let source = "\
say 1
shout 2
otherwise
if x is 1 then
otherwise
otherwise
end
end
count from 1 to 3 as i";
    let kinds: Vec<(usize, FindingKind)> = check(&Program::parse(source))
        .into_iter()
        .map(|f| (f.line, f.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (
                2,
                FindingKind::Syntax(SyntaxError::UnknownCommand {
                    text: "shout 2".into()
                })
            ),
            (3, FindingKind::StrayOtherwise),
            (6, FindingKind::DuplicateOtherwise),
            (8, FindingKind::StrayEnd),
            (9, FindingKind::Unterminated { keyword: "count" }),
        ]
    );
}
