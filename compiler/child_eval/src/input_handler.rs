//! Input handler for `ask`.
//!
//! Mirrors the print handler: stdin for the CLI, a scripted queue of answers
//! for tests.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

use parking_lot::Mutex;

/// Reads answers from standard input.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    /// Read one line; `Ok(None)` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        read_answer(&mut io::stdin().lock())
    }
}

/// Read one answer from `reader` without its line terminator.
fn read_answer(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match reader.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(strip_newline(line))),
    }
}

/// Answers supplied up front, consumed in order.
pub struct ScriptedInputHandler {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedInputHandler {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInputHandler {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    pub fn read_line(&self) -> Option<String> {
        self.answers.lock().pop_front()
    }

    /// Answers not yet consumed.
    #[cfg(test)]
    pub(crate) fn remaining(&self) -> usize {
        self.answers.lock().len()
    }
}

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Scripted(ScriptedInputHandler),
    /// No input available; every `ask` fails.
    Closed,
}

impl InputHandlerImpl {
    /// Read one answer without its line terminator.
    ///
    /// `Ok(None)` means the input has ended.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        match self {
            Self::Stdin(h) => h.read_line(),
            Self::Scripted(h) => Ok(h.read_line()),
            Self::Closed => Ok(None),
        }
    }
}

pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin(StdinInputHandler))
}

pub fn scripted_handler<I, S>(answers: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(InputHandlerImpl::Scripted(ScriptedInputHandler::new(answers)))
}

pub fn closed_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Closed)
}

fn strip_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
