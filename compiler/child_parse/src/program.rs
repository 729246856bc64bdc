//! The loaded program: an immutable array of classified lines.

use child_ir::keywords::{END, OTHERWISE};
use child_ir::{block_keyword, Stmt};

use crate::{classify, SyntaxError};

/// One source line together with its classification.
///
/// A line that failed to classify keeps its error; the error surfaces only
/// if the line is executed.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// 1-based line number.
    pub number: usize,
    /// The trimmed source text.
    pub text: String,
    pub stmt: Result<Stmt, SyntaxError>,
}

impl Line {
    /// The keyword of the block this line opens, if it opens one.
    ///
    /// A classified line answers from its statement. A line that failed to
    /// classify falls back to its leading words, so nesting stays consistent
    /// around a malformed header.
    pub fn block_keyword(&self) -> Option<&'static str> {
        match &self.stmt {
            Ok(stmt) => stmt.block_keyword(),
            Err(_) => block_keyword(&self.text),
        }
    }

    #[inline]
    pub fn opens_block(&self) -> bool {
        self.block_keyword().is_some()
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self.stmt, Ok(Stmt::End)) || self.text == END
    }

    #[inline]
    pub fn is_otherwise(&self) -> bool {
        matches!(self.stmt, Ok(Stmt::Otherwise)) || self.text == OTHERWISE
    }
}

/// Program text, loaded once and never modified.
///
/// Blank and comment lines are kept so that indexes match source lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub(crate) lines: Vec<Line>,
}

impl Program {
    /// Split `source` into lines and classify each one.
    pub fn parse(source: &str) -> Self {
        let lines: Vec<Line> = source
            .lines()
            .enumerate()
            .map(|(index, raw)| {
                let text = raw.trim();
                Line {
                    number: index + 1,
                    text: text.to_string(),
                    stmt: classify(text),
                }
            })
            .collect();

        let invalid = lines.iter().filter(|l| l.stmt.is_err()).count();
        tracing::debug!(lines = lines.len(), invalid, "classified program");
        Program { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The line at a 0-based index.
    #[inline]
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
