//! Static checking without execution.
//!
//! Reports every line that fails to classify and every block structure
//! problem, in line order. Runtime faults (undefined names, bad indexes) are
//! not detected here.

use std::fmt;

use crate::{Program, SyntaxError};

/// What [`check`] found wrong with a line.
#[derive(Clone, Debug, PartialEq)]
pub enum FindingKind {
    Syntax(SyntaxError),
    /// A block opener with no matching `end`.
    Unterminated { keyword: &'static str },
    /// `end` with no open block.
    StrayEnd,
    /// `otherwise` not directly inside an `if`.
    StrayOtherwise,
    /// A second `otherwise` in the same `if`.
    DuplicateOtherwise,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Finding {
    /// 1-based line number.
    pub line: usize,
    pub kind: FindingKind,
}

impl Finding {
    /// Errors fail a run; the rest are ignored at runtime.
    pub fn is_error(&self) -> bool {
        matches!(
            self.kind,
            FindingKind::Syntax(_) | FindingKind::Unterminated { .. }
        )
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingKind::Syntax(err) => write!(f, "{err}"),
            FindingKind::Unterminated { keyword } => {
                write!(f, "missing 'end' for this '{keyword}' block")
            }
            FindingKind::StrayEnd => f.write_str("'end' without a block to close"),
            FindingKind::StrayOtherwise => f.write_str("'otherwise' outside of an 'if' block"),
            FindingKind::DuplicateOtherwise => {
                f.write_str("this 'if' already has an 'otherwise'; this one is never reached")
            }
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

struct OpenBlock {
    keyword: &'static str,
    index: usize,
    has_otherwise: bool,
}

/// Check every line and block of `program`.
pub fn check(program: &Program) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut open: Vec<OpenBlock> = Vec::new();

    for (index, line) in program.lines().iter().enumerate() {
        if let Err(err) = &line.stmt {
            findings.push(Finding {
                line: line.number,
                kind: FindingKind::Syntax(err.clone()),
            });
        }

        if let Some(keyword) = line.block_keyword() {
            open.push(OpenBlock {
                keyword,
                index,
                has_otherwise: false,
            });
        } else if line.is_end() {
            if open.pop().is_none() {
                findings.push(Finding {
                    line: line.number,
                    kind: FindingKind::StrayEnd,
                });
            }
        } else if line.is_otherwise() {
            let kind = match open.last_mut() {
                Some(block) if block.keyword == "if" => {
                    if block.has_otherwise {
                        Some(FindingKind::DuplicateOtherwise)
                    } else {
                        block.has_otherwise = true;
                        None
                    }
                }
                _ => Some(FindingKind::StrayOtherwise),
            };
            if let Some(kind) = kind {
                findings.push(Finding {
                    line: line.number,
                    kind,
                });
            }
        }
    }

    for block in open {
        findings.push(Finding {
            line: block.index.saturating_add(1),
            kind: FindingKind::Unterminated {
                keyword: block.keyword,
            },
        });
    }

    findings.sort_by_key(|f| f.line);
    findings
}
