//! Environment for variable scoping in the interpreter.
//!
//! A stack of frames: the global frame at the bottom and one frame per
//! active procedure call. Lookup checks the innermost frame, then the global
//! frame; a callee never sees its caller's locals.

use rustc_hash::FxHashMap;

use child_ir::Name;

use crate::{EvalErrorKind, Value};

/// Bindings owned by one activation (or by the top level).
#[derive(Clone, Debug, Default)]
struct Frame {
    bindings: FxHashMap<Name, Value>,
}

/// Environment for the interpreter using a frame stack.
#[derive(Clone, Debug)]
pub struct Environment {
    /// `frames[0]` is the global frame and is never popped.
    frames: Vec<Frame>,
}

impl Environment {
    /// Create a new environment with only the global frame.
    pub fn new() -> Self {
        Environment {
            frames: vec![Frame::default()],
        }
    }

    /// Number of frames, including the global one.
    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Push an empty frame for a procedure call.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(Frame::default());
    }

    /// Pop the innermost frame, discarding everything bound in it.
    ///
    /// The global frame is never popped.
    #[inline]
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Bind `name` in the innermost frame.
    #[inline]
    pub fn bind(&mut self, name: Name, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.bindings.insert(name, value);
        }
    }

    /// Look up a name: innermost frame first, then global.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let local = self.frames.last()?.bindings.get(name);
        local.or_else(|| self.frames.first()?.bindings.get(name))
    }

    /// Mutable lookup with the same search order as [`lookup`](Self::lookup).
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Value> {
        let top = self.frames.len().saturating_sub(1);
        if self
            .frames
            .get(top)
            .is_some_and(|f| f.bindings.contains_key(name))
        {
            return self.frames.get_mut(top)?.bindings.get_mut(name);
        }
        self.frames.first_mut()?.bindings.get_mut(name)
    }

    /// The list bound to `name`.
    pub fn list(&self, name: &str) -> Result<&[Value], EvalErrorKind> {
        let value = self.lookup(name).ok_or_else(|| EvalErrorKind::UndefinedList {
            name: name.to_string(),
        })?;
        value.as_list().ok_or_else(|| EvalErrorKind::NotAList {
            name: name.to_string(),
        })
    }

    /// The list bound to `name`, for in-place changes.
    pub fn list_mut(&mut self, name: &str) -> Result<&mut Vec<Value>, EvalErrorKind> {
        match self.lookup_mut(name) {
            Some(Value::List(items)) => Ok(items),
            Some(_) => Err(EvalErrorKind::NotAList {
                name: name.to_string(),
            }),
            None => Err(EvalErrorKind::UndefinedList {
                name: name.to_string(),
            }),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
