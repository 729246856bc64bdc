use super::*;
use crate::{buffer_handler, closed_handler, scripted_handler};
use child_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn interpreter(src: &str) -> Interpreter {
    InterpreterBuilder::new(Program::parse(src))
        .print_handler(buffer_handler())
        .input_handler(closed_handler())
        .build()
}

/// Run `src` and return what it printed; the run must succeed.
fn output(src: &str) -> String {
    let mut interp = interpreter(src);
    if let Err(err) = interp.run() {
        panic!("program failed: {err}\n--- output ---\n{}", interp.output());
    }
    interp.output()
}

/// Run `src`, which must fail; return the error and the output printed first.
fn failure(src: &str) -> (EvalError, String) {
    let mut interp = interpreter(src);
    match interp.run() {
        Ok(()) => panic!("program succeeded:\n{}", interp.output()),
        Err(err) => (err, interp.output()),
    }
}

fn run_ok(src: &str) -> Interpreter {
    let mut interp = interpreter(src);
    if let Err(err) = interp.run() {
        panic!("program failed: {err}");
    }
    interp
}

// Output

#[test]
fn say_renders_each_kind() {
    let out = output(
        "say 3\n\
         say 7 / 2\n\
         say 4 / 2\n\
         say \"hi\"\n\
         say [10, 20, 'a']\n\
         say true",
    );
    assert_eq!(out, "3\n3.5\n2.0\nhi\n[10, 20, 'a']\ntrue\n");
}

#[test]
fn blank_lines_and_comments_do_nothing() {
    assert_eq!(output("// hello\n\n   \nsay 1\n// bye"), "1\n");
}

#[test]
fn empty_program_runs() {
    assert_eq!(output(""), "");
}

// Conditionals

#[test]
fn if_takes_the_bigger_branch_and_leaves_age_alone() {
    let src = "remember 15 as age\n\
               if age is bigger than 12 then\n\
               say \"teen\"\n\
               otherwise\n\
               say \"kid\"\n\
               end\n\
               say age";
    assert_eq!(output(src), "teen\n15\n");
}

#[test]
fn if_takes_the_otherwise_branch() {
    let src = "remember 8 as age\n\
               if age is bigger than 12 then\n\
               say \"teen\"\n\
               otherwise\n\
               say \"kid\"\n\
               end\n\
               say \"done\"";
    assert_eq!(output(src), "kid\ndone\n");
}

#[test]
fn if_without_otherwise_can_skip_everything() {
    let src = "if 1 is 2 then\nsay \"never\"\nend\nsay \"after\"";
    assert_eq!(output(src), "after\n");
}

#[test]
fn comparison_verbs() {
    let src = "if 3 is smaller than 4 then\nsay \"a\"\nend\n\
               if \"x\" is not \"y\" then\nsay \"b\"\nend\n\
               if 1 is 1.0 then\nsay \"c\"\nend\n\
               if [1, 2] is [1, 2] then\nsay \"d\"\nend";
    assert_eq!(output(src), "a\nb\nc\nd\n");
}

#[test]
fn nested_blocks_resolve_their_own_ends() {
    let src = "remember 0 as hits\n\
               if 1 is 1 then\n\
               repeat 2 times\n\
               if hits is 0 then\n\
               say \"first\"\n\
               otherwise\n\
               say \"again\"\n\
               end\n\
               remember hits + 1 as hits\n\
               end\n\
               say \"inner done\"\n\
               otherwise\n\
               say \"wrong\"\n\
               end\n\
               say hits";
    assert_eq!(output(src), "first\nagain\ninner done\n2\n");
}

#[test]
fn loop_with_extra_spaces_stays_inside_the_false_branch() {
    let src = "list [1] as L\n\
               if 1 is 2 then\n\
               for  each item in L as x\n\
               say x\n\
               end\n\
               say \"inside false if\"\n\
               end\n\
               say \"after\"";
    assert_eq!(output(src), "after\n");
}

#[test]
fn spaced_loop_headers_run_normally() {
    let src = "list [1, 2] as L\n\
               for   each  item in L as x\n\
               repeat  2  times\n\
               say x\n\
               end\n\
               end";
    assert_eq!(output(src), "1\n1\n2\n2\n");
}

#[test]
fn stray_end_and_otherwise_are_ignored() {
    assert_eq!(output("end\notherwise\nsay 1"), "1\n");
}

proptest! {
    #[test]
    fn exactly_one_branch_runs(a in -50i64..50, b in -50i64..50) {
        let src = format!(
            "if {a} is bigger than {b} then\nsay \"yes\"\notherwise\nsay \"no\"\nend"
        );
        let expected = if a > b { "yes\n" } else { "no\n" };
        prop_assert_eq!(output(&src), expected);
    }
}

// Lists

#[test]
fn list_round_trip() {
    let interp = run_ok(
        "list [1, 2, 3] as L\n\
         add 4 to L\n\
         size of L as s\n\
         get item 3 from L as x",
    );
    assert_eq!(interp.lookup("s"), Some(&Value::Int(4)));
    assert_eq!(interp.lookup("x"), Some(&Value::Int(4)));
    assert_eq!(
        interp.lookup("L"),
        Some(&Value::List(vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::Int(4)
        ]))
    );
}

#[test]
fn get_item_counts_from_the_end_when_negative() {
    let interp = run_ok("list [10, 20, 30] as L\nget item -1 from L as last");
    assert_eq!(interp.lookup("last"), Some(&Value::Int(30)));
}

#[test]
fn index_out_of_range_halts_the_run() {
    let (err, out) = failure("list [1, 2] as L\nget item 5 from L as x\nsay \"after\"");
    assert_eq!(err.line, 2);
    assert_eq!(err.code(), ErrorCode::E2002);
    assert_eq!(out, "");
}

#[test]
fn remembered_lists_are_copies() {
    let interp = run_ok("list [1] as A\nremember A as B\nadd 2 to A\nsize of B as n");
    assert_eq!(interp.lookup("n"), Some(&Value::Int(1)));
}

#[test]
fn list_needs_a_list_value() {
    let (err, _) = failure("list 5 as L");
    assert_eq!(err.code(), ErrorCode::E2007);
}

#[test]
fn add_to_missing_or_non_list() {
    let (err, _) = failure("add 1 to nothing");
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedList {
            name: "nothing".into()
        }
    );
    let (err, _) = failure("remember 3 as n\nsize of n as s");
    assert_eq!(err.kind, EvalErrorKind::NotAList { name: "n".into() });
    assert_eq!(err.line, 2);
}

// Loops

#[test]
fn count_is_inclusive() {
    let src = "count from 1 to 3 as i\nsay i\nend";
    assert_eq!(output(src), "1\n2\n3\n");
}

#[test]
fn count_downwards_runs_zero_times() {
    assert_eq!(output("count from 5 to 1 as i\nsay i\nend\nsay \"done\""), "done\n");
}

#[test]
fn repeat_zero_times_runs_nothing() {
    assert_eq!(output("repeat 0 times\nsay \"x\"\nend\nsay \"ok\""), "ok\n");
    assert_eq!(output("repeat -2 times\nsay \"x\"\nend"), "");
}

#[test]
fn repeat_count_truncates_decimals() {
    assert_eq!(output("repeat 2.9 times\nsay \"x\"\nend"), "x\nx\n");
}

#[test]
fn repeat_needs_a_whole_number() {
    let (err, _) = failure("repeat \"many\" times\nsay 1\nend");
    assert_eq!(err.code(), ErrorCode::E2007);
    assert_eq!(err.line, 1);
}

#[test]
fn for_each_walks_the_list_in_order() {
    let src = "list [10, 20, 30] as numbers\nfor each item in numbers as num\nsay num\nend";
    assert_eq!(output(src), "10\n20\n30\n");
}

#[test]
fn for_each_iterates_a_snapshot() {
    let interp = run_ok(
        "list [1, 2] as L\n\
         for each item in L as v\n\
         add v to L\n\
         end\n\
         size of L as n",
    );
    assert_eq!(interp.lookup("n"), Some(&Value::Int(4)));
}

#[test]
fn unterminated_loop_reports_its_header() {
    let (err, _) = failure("say 1\nrepeat 3 times\nsay 2");
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(err.line, 2);
}

// Procedures

#[test]
fn add_procedure_prints_twelve() {
    let src = "learn how to add with a and b\n\
               remember a + b as result\n\
               say result\n\
               end\n\
               do add with 5 and 7";
    assert_eq!(output(src), "12\n");
}

#[test]
fn learn_does_not_run_the_body() {
    let interp = run_ok("learn how to greet with name\nsay name\nend");
    assert_eq!(interp.output(), "");
    let greet = interp.procedure("greet");
    assert_eq!(greet.map(|p| p.body.clone()), Some(1..2));
    assert_eq!(greet.map(|p| p.params.clone()), Some(vec!["name".to_string()]));
}

#[test]
fn redefinition_replaces_the_procedure() {
    let src = "learn how to hi\nsay 1\nend\nlearn how to hi\nsay 2\nend\ndo hi";
    assert_eq!(output(src), "2\n");
}

#[test]
fn arity_mismatch_runs_nothing() {
    let src = "learn how to add with a and b\n\
               say \"inside\"\n\
               end\n\
               do add with 1";
    let (err, out) = failure(src);
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "add".into(),
            expected: 2,
            given: 1,
        }
    );
    assert_eq!(err.line, 4);
    assert_eq!(out, "");
}

#[test]
fn unknown_procedure() {
    let (err, _) = failure("say 1\ndo fly");
    assert_eq!(err.code(), ErrorCode::E2005);
    assert_eq!(err.line, 2);
}

#[test]
fn recursion_keeps_each_activation_separate() {
    let src = "learn how to show with n\n\
               if n is bigger than 0 then\n\
               do show with n - 1\n\
               say n\n\
               end\n\
               end\n\
               do show with 3";
    assert_eq!(output(src), "1\n2\n3\n");
}

#[test]
fn recursive_factorial() {
    let src = "learn how to fact with n and acc\n\
               if n is smaller than 2 then\n\
               say acc\n\
               otherwise\n\
               do fact with n - 1 and acc * n\n\
               end\n\
               end\n\
               do fact with 5 and 1";
    assert_eq!(output(src), "120\n");
}

#[test]
fn procedure_locals_vanish_and_globals_are_visible() {
    let src = "list [] as log\n\
               remember 10 as g\n\
               learn how to work with x\n\
               remember x * 2 as temp\n\
               add temp + g to log\n\
               end\n\
               do work with 1\n\
               say log";
    let mut interp = interpreter(src);
    assert_eq!(interp.run(), Ok(()));
    assert_eq!(interp.output(), "[12]\n");
    assert_eq!(interp.lookup("temp"), None);
    assert_eq!(interp.lookup("x"), None);
    assert_eq!(interp.call_depth(), 0);
    assert_eq!(interp.env().depth(), 1);
}

#[test]
fn procedure_assignments_do_not_leak_into_globals() {
    let src = "remember 1 as a\n\
               learn how to shadow\n\
               remember 99 as a\n\
               say a\n\
               end\n\
               do shadow\n\
               say a";
    assert_eq!(output(src), "99\n1\n");
}

#[test]
fn callee_cannot_see_caller_locals() {
    let src = "learn how to inner\nsay secret\nend\n\
               learn how to outer\nremember 5 as secret\ndo inner\nend\n\
               do outer";
    let (err, _) = failure(src);
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(err.line, 2);
}

#[test]
fn errors_inside_procedures_report_the_body_line() {
    let src = "learn how to broken\nsay 1 / 0\nend\n\ndo broken";
    let (err, _) = failure(src);
    assert_eq!(err.line, 2);
    assert_eq!(err.code(), ErrorCode::E2001);
}

#[test]
fn runaway_recursion_hits_the_limit() {
    let src = "learn how to forever\ndo forever\nend\ndo forever";
    let mut interp = InterpreterBuilder::new(Program::parse(src))
        .print_handler(buffer_handler())
        .max_call_depth(Some(50))
        .build();
    let err = interp.run().err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::RecursionLimit { limit: 50 })
    );
    assert_eq!(interp.call_depth(), 0);
}

// Input

#[test]
fn ask_coerces_numbers() {
    let src = "ask \"N?\" and remember it as a\n\
               ask \"N?\" and remember it as b\n\
               ask \"N?\" and remember it as c";
    let mut interp = InterpreterBuilder::new(Program::parse(src))
        .print_handler(buffer_handler())
        .input_handler(scripted_handler(["7", "7.5", "seven"]))
        .build();
    assert_eq!(interp.run(), Ok(()));
    assert!(matches!(interp.lookup("a"), Some(Value::Int(7))));
    assert!(matches!(interp.lookup("b"), Some(Value::Float(f)) if *f == 7.5));
    assert!(matches!(interp.lookup("c"), Some(Value::Str(s)) if s == "seven"));
}

#[test]
fn ask_prints_the_prompt_on_the_same_line() {
    let src = "ask \"Name?\" and remember it as name\nsay \"Hi \" + name";
    let mut interp = InterpreterBuilder::new(Program::parse(src))
        .print_handler(buffer_handler())
        .input_handler(scripted_handler(["Ada"]))
        .build();
    assert_eq!(interp.run(), Ok(()));
    assert_eq!(interp.output(), "Name? Hi Ada\n");
}

#[test]
fn ask_without_input_fails() {
    let (err, out) = failure("ask \"Age?\" and remember it as age");
    assert_eq!(err.code(), ErrorCode::E2009);
    assert_eq!(out, "Age? ");
}

// Syntax errors surface only when executed

#[test]
fn bad_lines_in_untaken_branches_are_harmless() {
    let src = "if 1 is 2 then\nblorp\nend\nsay \"ok\"";
    assert_eq!(output(src), "ok\n");
}

#[test]
fn unknown_command_keeps_earlier_output() {
    let (err, out) = failure("say 1\nblorp\nsay 2");
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.line, 2);
    assert_eq!(out, "1\n");
}

#[test]
fn unrecognized_condition() {
    let (err, _) = failure("if 1 equals 1 then\nsay 1\nend");
    assert_eq!(err.code(), ErrorCode::E1004);
}
