//! Call-stack tracking for procedure calls.
//!
//! Each `do` pushes a [`CallFrame`]; the depth check lives in
//! [`CallStack::push`] so runaway recursion becomes a clean error.

use crate::EvalErrorKind;

/// A single active procedure call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Procedure name.
    pub name: String,
    /// 1-based line of the `do` statement that made the call.
    pub call_line: usize,
}

/// Live call stack for the interpreter.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// Create an empty call stack; `None` means no depth limit.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is NOT pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalErrorKind> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(EvalErrorKind::RecursionLimit { limit: max });
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the most recent call frame.
    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    /// Current call depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Active calls, most recent first.
    pub fn frames(&self) -> impl Iterator<Item = &CallFrame> {
        self.frames.iter().rev()
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(None)
    }
}
