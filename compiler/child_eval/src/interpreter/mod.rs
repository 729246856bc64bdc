//! Tree-walking interpreter for CHILD programs.
//!
//! There is one interpreter per run, owning the environment, the procedure
//! table and the cursor. Compound statements run their bodies through
//! [`Interpreter::execute_block`], which redirects the cursor to the body
//! and restores it afterwards, so every level of nesting resumes where it
//! left off.
//!
//! # Module Structure
//!
//! - `mod.rs`: driver loop and statement dispatch
//! - `builder.rs`: `InterpreterBuilder`
//! - `procedure.rs`: `learn` definitions and the `do` call protocol

mod builder;
mod procedure;

use std::rc::Rc;

use rustc_hash::FxHashMap;

use child_ir::{Condition, Expr, Name, Stmt};
use child_parse::Program;

use crate::diagnostics::CallStack;
use crate::exec::{coerce_input, evaluate, list_item};
use crate::input_handler::SharedInputHandler;
use crate::operators::compare;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalError, EvalErrorKind, EvalResult, ExprFault, Value};

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use procedure::Procedure;

/// Interpreter state for a single run.
pub struct Interpreter {
    /// Shared so a line can be borrowed while `self` is mutated.
    program: Rc<Program>,
    env: Environment,
    procedures: FxHashMap<Name, Rc<Procedure>>,
    /// 0-based index of the line being executed.
    cursor: usize,
    call_stack: CallStack,
    print_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
}

impl Interpreter {
    /// Run the whole program from the first line.
    pub fn run(&mut self) -> EvalResult {
        tracing::debug!(lines = self.program.len(), "run");
        self.cursor = 0;
        let end = self.program.len();
        self.run_until(end)
    }

    /// Execute lines `[start, end)`, then put the cursor back where it was.
    pub fn execute_block(&mut self, start: usize, end: usize) -> EvalResult {
        tracing::trace!(start, end, "enter block");
        let saved = self.cursor;
        self.cursor = start;
        let result = self.run_until(end);
        self.cursor = saved;
        result
    }

    fn run_until(&mut self, end: usize) -> EvalResult {
        while self.cursor < end {
            self.execute_line()?;
            self.cursor = next_line(self.cursor);
        }
        Ok(())
    }

    /// Execute the line under the cursor.
    ///
    /// Compound statements leave the cursor on their closing `end`, so the
    /// driver's increment moves past the whole construct.
    fn execute_line(&mut self) -> EvalResult {
        let program = Rc::clone(&self.program);
        let Some(line) = program.line(self.cursor) else {
            return Ok(());
        };
        let number = line.number;
        let stmt = line
            .stmt
            .as_ref()
            .map_err(|err| EvalErrorKind::Syntax(err.clone()).at(number))?;
        tracing::trace!(line = number, kind = stmt.keyword(), text = %line.text);
        self.execute_stmt(stmt, number)
    }

    fn execute_stmt(&mut self, stmt: &Stmt, number: usize) -> EvalResult {
        let at = |kind: EvalErrorKind| kind.at(number);
        match stmt {
            Stmt::Say { value } => {
                let value = self.eval(value).map_err(at)?;
                self.print_handler.println(&value.to_string());
            }
            Stmt::Remember { value, name } => {
                let value = self.eval(value).map_err(at)?;
                self.env.bind(name.clone(), value);
            }
            Stmt::MakeList { value, name } => {
                let value = self.eval(value).map_err(at)?;
                if !matches!(value, Value::List(_)) {
                    return Err(at(EvalErrorKind::TypeMismatch {
                        context: "list",
                        expected: "a list like [1, 2, 3]",
                        found: value.type_name().to_string(),
                    }));
                }
                self.env.bind(name.clone(), value);
            }
            Stmt::Append { value, list } => {
                let value = self.eval(value).map_err(at)?;
                self.env.list_mut(list).map_err(at)?.push(value);
            }
            Stmt::GetItem { index, list, name } => {
                let item = self.get_item(index, list).map_err(at)?;
                self.env.bind(name.clone(), item);
            }
            Stmt::SizeOf { list, name } => {
                let len = self.env.list(list).map_err(at)?.len();
                let len = i64::try_from(len).unwrap_or(i64::MAX);
                self.env.bind(name.clone(), Value::Int(len));
            }
            Stmt::Ask { prompt, name } => {
                let answer = self.ask(prompt).map_err(at)?;
                self.env.bind(name.clone(), answer);
            }
            Stmt::If { condition } => self.execute_if(condition, number)?,
            Stmt::Repeat { times } => self.execute_repeat(times, number)?,
            Stmt::Count { from, to, name } => self.execute_count(from, to, name, number)?,
            Stmt::ForEach { list, name } => self.execute_for_each(list, name, number)?,
            Stmt::Learn { name, params } => self.define_procedure(name, params, number)?,
            Stmt::Do { name, args } => self.call_procedure(name, args, number)?,
            // Consumed by their opener; harmless on their own.
            Stmt::Otherwise | Stmt::End | Stmt::Blank => {}
        }
        Ok(())
    }

    fn eval(&self, expr: &Expr) -> Result<Value, EvalErrorKind> {
        evaluate(expr, &self.env)
    }

    fn eval_int(&self, expr: &Expr, context: &'static str) -> Result<i64, EvalErrorKind> {
        let value = self.eval(expr)?;
        value.to_int().ok_or_else(|| EvalErrorKind::TypeMismatch {
            context,
            expected: "a whole number",
            found: value.repr(),
        })
    }

    /// The matching `end` of the block opened on the cursor line.
    fn block_end(&self, number: usize) -> Result<usize, EvalError> {
        self.program
            .find_matching_end(self.cursor)
            .map_err(|err| EvalErrorKind::from(err).at(number))
    }

    fn execute_if(&mut self, condition: &Condition, number: usize) -> EvalResult {
        let open = self.cursor;
        let end = self.block_end(number)?;
        let otherwise = self.program.find_otherwise(open);
        let taken = self.eval_condition(condition).map_err(|kind| kind.at(number))?;
        tracing::trace!(line = number, taken, "if");
        match (taken, otherwise) {
            (true, Some(split)) => self.execute_block(next_line(open), split)?,
            (true, None) => self.execute_block(next_line(open), end)?,
            (false, Some(split)) => self.execute_block(next_line(split), end)?,
            (false, None) => {}
        }
        self.cursor = end;
        Ok(())
    }

    fn eval_condition(&self, condition: &Condition) -> Result<bool, EvalErrorKind> {
        let left = self.eval(&condition.left)?;
        let right = self.eval(&condition.right)?;
        compare(condition.op, &left, &right)
    }

    fn execute_repeat(&mut self, times: &Expr, number: usize) -> EvalResult {
        let open = self.cursor;
        let times = self
            .eval_int(times, "repeat")
            .map_err(|kind| kind.at(number))?;
        let end = self.block_end(number)?;
        for _ in 0..times.max(0) {
            self.execute_block(next_line(open), end)?;
        }
        self.cursor = end;
        Ok(())
    }

    fn execute_count(&mut self, from: &Expr, to: &Expr, name: &Name, number: usize) -> EvalResult {
        let open = self.cursor;
        let first = self.eval_int(from, "count").map_err(|kind| kind.at(number))?;
        let last = self.eval_int(to, "count").map_err(|kind| kind.at(number))?;
        let end = self.block_end(number)?;
        for i in first..=last {
            self.env.bind(name.clone(), Value::Int(i));
            self.execute_block(next_line(open), end)?;
        }
        self.cursor = end;
        Ok(())
    }

    fn execute_for_each(&mut self, list: &str, name: &Name, number: usize) -> EvalResult {
        let open = self.cursor;
        let items = self.env.list(list).map_err(|kind| kind.at(number))?.to_vec();
        let end = self.block_end(number)?;
        for item in items {
            self.env.bind(name.clone(), item);
            self.execute_block(next_line(open), end)?;
        }
        self.cursor = end;
        Ok(())
    }

    fn get_item(&self, index: &Expr, list: &str) -> Result<Value, EvalErrorKind> {
        let items = self.env.list(list)?;
        let index = self.eval_int(index, "get item")?;
        list_item(items, index, list).map_err(|fault| match fault {
            ExprFault::IndexOutOfRange { target, index, len } => {
                EvalErrorKind::IndexOutOfRange { target, index, len }
            }
            fault => EvalErrorKind::Unevaluable {
                expr: format!("{list}[{index}]"),
                fault,
            },
        })
    }

    /// Print the prompt (and a space) on the current line, then read one answer.
    fn ask(&self, prompt: &Expr) -> Result<Value, EvalErrorKind> {
        let prompt = self.eval(prompt)?;
        self.print_handler.print(&format!("{prompt} "));
        self.print_handler.flush();
        match self.input_handler.read_line() {
            Ok(Some(answer)) => Ok(coerce_input(&answer)),
            Ok(None) => Err(EvalErrorKind::InputUnavailable {
                prompt: prompt.repr(),
            }),
            Err(err) => {
                tracing::warn!(error = %err, "reading input failed");
                Err(EvalErrorKind::InputFailed {
                    prompt: prompt.repr(),
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Captured output, when the print handler is a buffer.
    pub fn output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Look a name up as the currently executing code would see it.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.env.lookup(name)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn procedure(&self, name: &str) -> Option<&Procedure> {
        self.procedures.get(name).map(Rc::as_ref)
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }
}

/// The line after `index`.
#[inline]
fn next_line(index: usize) -> usize {
    index.saturating_add(1)
}

#[cfg(test)]
mod tests;
