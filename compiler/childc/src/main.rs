//! CHILD interpreter CLI.

use std::process::ExitCode;

use childc::commands::{check_file, explain_error, run_demo, run_file};
use childc::init_tracing;
use childc::options::parse_options;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (options, rest) = match parse_options(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };
    init_tracing(options.trace);

    let Some(command) = rest.first() else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match command.as_str() {
        "run" => {
            let Some(path) = rest.get(1) else {
                eprintln!("Usage: child run <file.child> [options]");
                return ExitCode::FAILURE;
            };
            run_file(path, &options)
        }
        "check" => {
            let Some(path) = rest.get(1) else {
                eprintln!("Usage: child check <file.child> [--format=text|json]");
                return ExitCode::FAILURE;
            };
            check_file(path, &options)
        }
        "demo" => run_demo(&options),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("CHILD {}", env!("CARGO_PKG_VERSION"));
            println!("Computational High-level Instruction Language for Dummies");
            ExitCode::SUCCESS
        }
        "--explain" | "explain" => {
            let Some(code) = rest.get(1) else {
                eprintln!("Usage: child --explain <ERROR_CODE>");
                eprintln!("Example: child --explain E2002");
                return ExitCode::FAILURE;
            };
            explain_error(code)
        }
        _ => {
            // A bare path runs the file.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("child"))
            {
                run_file(command, &options)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

fn print_usage() {
    println!("CHILD - Computational High-level Instruction Language for Dummies");
    println!();
    println!("Usage: child <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.child>     Run a CHILD program");
    println!("  check <file.child>   Find problems without running the program");
    println!("  demo                 Run the built-in demo program");
    println!("  --explain <code>     Explain an error code (e.g., E2002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<when>       Color diagnostics: auto (default), always, never");
    println!("  --format=<fmt>       Diagnostic format: text (default), json");
    println!("  --max-depth=<n>      Procedure call depth limit (default 10000, 0 = none)");
    println!("  --trace              Trace every executed line on stderr");
    println!();
    println!("Examples:");
    println!("  child run hello.child");
    println!("  child hello.child                # same as 'run'");
    println!("  child check hello.child --format=json");
    println!("  child --explain E2005");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=child_eval=debug) for finer control of tracing.");
}
