//! The `demo` command: run the built-in showcase program.

use std::process::ExitCode;

use super::run_source;
use crate::options::Options;

/// A tour of the language, used by `child demo`.
pub const DEMO_SOURCE: &str = include_str!("../demo.child");

pub fn run_demo(options: &Options) -> ExitCode {
    println!("Running CHILD Program...");
    println!();
    run_source("demo.child", DEMO_SOURCE, options)
}
