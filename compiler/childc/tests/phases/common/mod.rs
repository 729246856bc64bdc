//! Shared test utilities for phase tests.

use child_eval::{buffer_handler, scripted_handler, EvalResult, InterpreterBuilder};
use child_parse::Program;

/// Run `source` with captured output and the given answers for `ask`.
pub fn run_captured(source: &str, answers: &[&str]) -> (EvalResult, String) {
    let mut interpreter = InterpreterBuilder::new(Program::parse(source))
        .print_handler(buffer_handler())
        .input_handler(scripted_handler(answers.iter().copied()))
        .build();
    let result = interpreter.run();
    (result, interpreter.output())
}

/// Run `source`, which must succeed, and return its output.
pub fn output_of(source: &str) -> String {
    let (result, output) = run_captured(source, &[]);
    if let Err(err) = result {
        panic!("program failed: {err}\n--- output ---\n{output}");
    }
    output
}
