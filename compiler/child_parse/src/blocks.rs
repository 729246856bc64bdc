//! Block resolver.
//!
//! Block boundaries are found by scanning forward from the opening line with
//! a nesting counter. Openers are recognised from each line's classified
//! statement; a line that fails to classify still opens or closes blocks by
//! its leading words, so nesting stays consistent around a malformed
//! statement.

use thiserror::Error;

use crate::program::Line;
use crate::Program;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BlockError {
    /// The program ended before the block's `end`.
    #[error("missing 'end' for this '{keyword}' block")]
    Unterminated { keyword: &'static str, line: usize },
}

/// What a scanned line does to the nesting depth.
enum Marker {
    Open,
    Otherwise,
    End,
    Other,
}

fn marker(line: &Line) -> Marker {
    if line.opens_block() {
        Marker::Open
    } else if line.is_end() {
        Marker::End
    } else if line.is_otherwise() {
        Marker::Otherwise
    } else {
        Marker::Other
    }
}

impl Program {
    /// Lines after the opener at `open`, with their indexes.
    fn after(&self, open: usize) -> impl Iterator<Item = (usize, &Line)> + '_ {
        self.lines.iter().enumerate().skip(open.saturating_add(1))
    }

    /// Index of the `end` that closes the block opened at `open`.
    ///
    /// `otherwise` never changes the depth.
    pub fn find_matching_end(&self, open: usize) -> Result<usize, BlockError> {
        let mut depth = 1usize;
        for (index, line) in self.after(open) {
            match marker(line) {
                Marker::Open => depth = depth.saturating_add(1),
                Marker::End => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Ok(index);
                    }
                }
                Marker::Otherwise | Marker::Other => {}
            }
        }
        Err(self.unterminated(open))
    }

    /// Index of the `otherwise` belonging to the `if` at `open`, or `None`
    /// when its `end` (or the end of the program) comes first.
    pub fn find_otherwise(&self, open: usize) -> Option<usize> {
        let mut depth = 1usize;
        for (index, line) in self.after(open) {
            match marker(line) {
                Marker::Open => depth = depth.saturating_add(1),
                Marker::Otherwise if depth == 1 => return Some(index),
                Marker::End => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return None;
                    }
                }
                Marker::Otherwise | Marker::Other => {}
            }
        }
        None
    }

    fn unterminated(&self, open: usize) -> BlockError {
        let keyword = self
            .line(open)
            .and_then(Line::block_keyword)
            .unwrap_or("block");
        BlockError::Unterminated {
            keyword,
            line: open.saturating_add(1),
        }
    }
}
