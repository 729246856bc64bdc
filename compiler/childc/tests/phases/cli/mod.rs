//! The `child` binary end to end.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn child() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_child"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn source_file(source: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".child").tempfile().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run(args: &[&str], path: &Path) -> Output {
    child().args(args).arg(path).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn run_prints_program_output() {
    let file = source_file("remember 2 as x\nsay x * 21\n");
    let output = run(&["run"], file.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "42\n");
}

#[test]
fn bare_child_path_runs_the_file() {
    let file = source_file("say \"hi\"\n");
    let output = run(&[], file.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output), "hi\n");
}

#[test]
fn runtime_error_exits_with_one_and_keeps_output() {
    let file = source_file("say \"start\"\ndo fly\nsay \"never\"\n");
    let output = run(&["run", "--color=never"], file.path());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "start\n");

    let err = stderr(&output);
    assert!(err.contains("error[E2005]: I don't know how to 'fly'"), "{err}");
    assert!(err.contains(":2\n"), "{err}");
    assert!(err.contains("2 | do fly"), "{err}");
    assert!(err.contains("= help: teach it first with 'learn how to fly'"), "{err}");
}

#[test]
fn ask_reads_stdin() {
    let file = source_file("ask \"Number?\" and remember it as n\nsay n + 1\n");
    let mut process = child()
        .arg("run")
        .arg(file.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    process
        .stdin
        .take()
        .unwrap()
        .write_all(b"41\n")
        .unwrap();
    let output = process.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Number? 42\n");
}

#[test]
fn ask_at_end_of_input_fails() {
    let file = source_file("ask \"Name?\" and remember it as n\n");
    let output = child()
        .arg("run")
        .arg("--color=never")
        .arg(file.path())
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("E2009"));
}

#[test]
fn recursion_limit_is_configurable() {
    let file = source_file("learn how to loop\ndo loop\nend\ndo loop\n");
    let output = run(&["run", "--color=never", "--max-depth=20"], file.path());
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error[E2008]"), "{err}");
    assert!(err.contains("the limit is 20"), "{err}");
}

#[test]
fn check_reports_all_findings() {
    let file = source_file("say 1\nshout\nrepeat 2 times\nsay 2\nend\nend\n");
    let output = run(&["check", "--color=never"], file.path());
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error[E1001]"), "{err}");
    assert!(err.contains("warning[W1001]"), "{err}");
    assert!(err.contains("error: found 1 error; 1 warning emitted"), "{err}");
}

#[test]
fn check_does_not_execute() {
    let file = source_file("say \"side effect\"\ndo missing\n");
    let output = run(&["check"], file.path());
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("no problems found\n"));
    assert!(!stdout(&output).contains("side effect"));
}

#[test]
fn check_json_output() {
    let file = source_file("remember 5\n");
    let output = run(&["check", "--format=json"], file.path());
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with('['), "{err}");
    assert!(err.contains("\"code\": \"E1002\""), "{err}");
    assert!(err.contains("\"line\": 1,"), "{err}");
    assert!(err.contains("use 'remember VALUE as NAME'"), "{err}");
    assert!(err.trim_end().ends_with(']'), "{err}");
}

#[test]
fn explain_prints_docs() {
    let output = child().args(["--explain", "E2002"]).output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("# E2002: Index Out Of Range"));
}

#[test]
fn explain_unknown_code_fails() {
    let output = child().args(["--explain", "E9999"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown error code: E9999"));
}

#[test]
fn demo_runs() {
    let output = child().arg("demo").output().unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Running CHILD Program...\n\n=== CHILD Language Demo ==="));
    assert!(out.ends_with("Blastoff!\n"));
}

#[test]
fn missing_file_fails() {
    let output = child()
        .args(["run", "/definitely/not/here.child"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("could not read"));
}

#[test]
fn bad_option_fails() {
    let output = child().args(["--format=xml", "demo"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid value 'xml' for --format"));
}

#[test]
fn version_and_help() {
    let version = child().arg("version").output().unwrap();
    assert!(stdout(&version).starts_with("CHILD "));
    let help = child().arg("help").output().unwrap();
    assert!(stdout(&help).contains("Usage: child <command> [options]"));
}
