#![deny(clippy::arithmetic_side_effects)]
//! CHILD Eval - line-by-line interpreter for CHILD programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: variable scoping with a frame stack (global + one frame
//!   per active procedure call)
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `compare`: the four `if` comparison verbs
//! - `Interpreter`: program driver, statement dispatch and the procedure
//!   call protocol
//! - `CallStack`: active procedure calls with a depth limit
//!
//! Output and input go through swappable handlers so programs can run
//! against a terminal or against buffers in tests.

mod environment;
pub mod errors;
pub mod exec;
pub mod diagnostics;
mod input_handler;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult, ExprFault};
pub use input_handler::{
    closed_handler, scripted_handler, stdin_handler, InputHandlerImpl, ScriptedInputHandler,
    SharedInputHandler, StdinInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder, Procedure, DEFAULT_MAX_CALL_DEPTH};
pub use operators::{compare, evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use value::Value;
