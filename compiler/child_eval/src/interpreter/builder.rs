//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use child_parse::Program;

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Environment;

/// Active procedure calls allowed before a run fails with a recursion error.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for creating Interpreter instances.
///
/// Defaults suit the command line: stdout for `say`, stdin for `ask`, and a
/// call depth limit of [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder {
    program: Program,
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            print_handler: None,
            input_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Set where `say` and prompts are written.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set where `ask` reads answers from.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Limit nested procedure calls; `None` removes the limit.
    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            program: Rc::new(self.program),
            env: Environment::new(),
            procedures: FxHashMap::default(),
            cursor: 0,
            call_stack: CallStack::new(self.max_call_depth),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
        }
    }
}
