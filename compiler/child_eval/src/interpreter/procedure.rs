//! Procedure definition (`learn how to`) and invocation (`do`).
//!
//! A call evaluates its arguments in the caller's frame, checks arity, then
//! runs the body in a fresh frame holding only the parameters. Popping that
//! frame on return discards everything the call bound locally.

use std::ops::Range;
use std::rc::Rc;

use child_ir::{Expr, Name};

use super::{next_line, Interpreter};
use crate::diagnostics::CallFrame;
use crate::stack::ensure_sufficient_stack;
use crate::{EvalErrorKind, EvalResult, Value};

/// A procedure registered by `learn how to`.
///
/// The body is a line range into the program; it is never copied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Procedure {
    pub name: Name,
    pub params: Vec<Name>,
    /// Lines between the header and the matching `end` (0-based, exclusive).
    pub body: Range<usize>,
    /// 1-based line of the `learn` header.
    pub line: usize,
}

impl Interpreter {
    /// Register the procedure whose header is under the cursor and skip its body.
    ///
    /// Redefinition replaces the earlier procedure.
    pub(super) fn define_procedure(
        &mut self,
        name: &Name,
        params: &[Name],
        number: usize,
    ) -> EvalResult {
        let end = self.block_end(number)?;
        let procedure = Procedure {
            name: name.clone(),
            params: params.to_vec(),
            body: next_line(self.cursor)..end,
            line: number,
        };
        tracing::debug!(procedure = %name, params = params.len(), line = number, "learned");
        self.procedures.insert(name.clone(), Rc::new(procedure));
        self.cursor = end;
        Ok(())
    }

    /// Run `do name with a1 and a2 ...` from line `number`.
    #[tracing::instrument(level = "debug", skip(self, args), fields(depth = self.call_stack.depth()))]
    pub(super) fn call_procedure(&mut self, name: &str, args: &[Expr], number: usize) -> EvalResult {
        let at = |kind: EvalErrorKind| kind.at(number);
        let procedure = self
            .procedures
            .get(name)
            .cloned()
            .ok_or_else(|| at(EvalErrorKind::UnknownProcedure { name: name.to_string() }))?;

        let values = args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<Result<Vec<Value>, _>>()
            .map_err(at)?;

        if values.len() != procedure.params.len() {
            return Err(at(EvalErrorKind::ArityMismatch {
                name: name.to_string(),
                expected: procedure.params.len(),
                given: values.len(),
            }));
        }

        self.call_stack
            .push(CallFrame {
                name: name.to_string(),
                call_line: number,
            })
            .map_err(at)?;
        self.env.push_frame();
        for (param, value) in procedure.params.iter().zip(values) {
            self.env.bind(param.clone(), value);
        }

        let body = procedure.body.clone();
        let result = ensure_sufficient_stack(|| self.execute_block(body.start, body.end));

        self.env.pop_frame();
        self.call_stack.pop();
        tracing::debug!(ok = result.is_ok(), "returned");
        result
    }
}
