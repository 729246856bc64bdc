//! Whole programs through the interpreter.

use child_diagnostic::ErrorCode;
use child_eval::EvalErrorKind;
use childc::commands::DEMO_SOURCE;
use pretty_assertions::assert_eq;

use crate::common::{output_of, run_captured};

#[test]
fn demo_program_output() {
    let expected = "\
=== CHILD Language Demo ===

Testing IF and OTHERWISE:
You're a teenager or older!

Testing LISTS:
My list of numbers:
[10, 20, 30, 40, 50]
After adding 60:
[10, 20, 30, 40, 50, 60]
The first number is:
10
The list has this many items:
6

Printing each number:
10
20
30
40
50
60

Testing REPEAT:
Hip hip hooray!
Hip hip hooray!
Hip hip hooray!

Testing PROCEDURES:
Hello, Alice!
Nice to meet you!

The sum is:
12

Countdown from 5:
5
4
3
2
1
Blastoff!
";
    assert_eq!(output_of(DEMO_SOURCE), expected);
}

#[test]
fn guessing_game_with_input() {
    let source = "\
remember 7 as secret
remember 0 as tries
repeat 3 times
  ask \"Guess:\" and remember it as guess
  remember tries + 1 as tries
  if guess is secret then
    say \"Got it!\"
  otherwise
    if guess is bigger than secret then
      say \"Too big\"
    otherwise
      say \"Too small\"
    end
  end
end
say tries";
    let (result, output) = run_captured(source, &["3", "9", "7"]);
    assert_eq!(result, Ok(()));
    assert_eq!(
        output,
        "Guess: Too small\nGuess: Too big\nGuess: Got it!\n3\n"
    );
}

#[test]
fn text_answers_stay_text() {
    let (result, output) = run_captured(
        "ask \"Name?\" and remember it as name\nsay \"Hello \" + name",
        &["Ada"],
    );
    assert_eq!(result, Ok(()));
    assert_eq!(output, "Name? Hello Ada\n");
}

#[test]
fn procedures_build_lists() {
    let source = "\
list [] as squares
learn how to square into with n
  add n * n to squares
end
count from 1 to 4 as i
  do square into with i
end
say squares
size of squares as total
get item -1 from squares as last
say total
say last";
    assert_eq!(output_of(source), "[1, 4, 9, 16]\n4\n16\n");
}

#[test]
fn recursive_fibonacci() {
    let source = "\
list [] as out
learn how to fib with a and b and n
  if n is bigger than 0 then
    add a to out
    do fib with b and a + b and n - 1
  end
end
do fib with 0 and 1 and 10
say out";
    assert_eq!(output_of(source), "[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]\n");
}

#[test]
fn error_stops_the_run_after_earlier_output() {
    let (result, output) = run_captured("say \"before\"\nsay missing + 1\nsay \"after\"", &[]);
    let err = result.unwrap_err();
    assert_eq!(output, "before\n");
    assert_eq!(err.line, 2);
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(
        err.to_string(),
        "error on line 2: can't understand this expression: missing + 1 ('missing' has no value yet)"
    );
}

#[test]
fn unevaluable_message_uses_current_values() {
    let (result, _) = run_captured("remember \"15\" as age\nsay age - 1", &[]);
    match result.unwrap_err().kind {
        EvalErrorKind::Unevaluable { expr, .. } => assert_eq!(expr, "'15' - 1"),
        other => panic!("expected an unevaluable expression, got {other:?}"),
    }
}

#[test]
fn mixed_arithmetic() {
    let source = "\
say 1 + 2.5
say 10 / 4
say \"ab\" * 3
say [0] * 2
say [1] + [2, 3]
say -(2 - 5)";
    assert_eq!(
        output_of(source),
        "3.5\n2.5\nababab\n[0, 0]\n[1, 2, 3]\n3\n"
    );
}

#[test]
fn comparing_text_with_numbers_fails() {
    let (result, _) = run_captured("if \"a\" is bigger than 1 then\nend", &[]);
    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2007);
    assert_eq!(
        err.kind,
        EvalErrorKind::Incomparable {
            left: "text",
            right: "number"
        }
    );
}

#[test]
fn loop_variable_stays_bound_after_the_loop() {
    let (result, output) = run_captured("count from 1 to 3 as i\nend\nsay i", &[]);
    assert_eq!(result, Ok(()));
    assert_eq!(output, "3\n");
}
