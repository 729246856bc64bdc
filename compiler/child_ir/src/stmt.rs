//! Statement kinds.
//!
//! Every source line classifies into exactly one [`Stmt`]. Structural lines
//! (`otherwise`, `end`, blanks, comments) are statements too so that line
//! indexes stay aligned with the source.

use std::fmt;

use crate::{Expr, Name};

/// Comparison verbs understood by `if`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `is bigger than`
    Bigger,
    /// `is smaller than`
    Smaller,
    /// `is not`
    IsNot,
    /// `is`
    Is,
}

impl CompareOp {
    /// Phrases in the order they are tried. `is not` must precede `is`,
    /// since every `is not` phrase also contains `is`.
    pub const PRIORITY: [CompareOp; 4] = [
        CompareOp::Bigger,
        CompareOp::Smaller,
        CompareOp::IsNot,
        CompareOp::Is,
    ];

    /// The phrase as it appears between the operands, including the
    /// surrounding spaces.
    pub fn phrase(self) -> &'static str {
        match self {
            CompareOp::Bigger => " is bigger than ",
            CompareOp::Smaller => " is smaller than ",
            CompareOp::IsNot => " is not ",
            CompareOp::Is => " is ",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase().trim())
    }
}

/// `left <phrase> right`
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub left: Expr,
    pub op: CompareOp,
    pub right: Expr,
}

/// One classified source line.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `say <expr>`
    Say { value: Expr },
    /// `remember <expr> as <name>`
    Remember { value: Expr, name: Name },
    /// `list <expr> as <name>`
    MakeList { value: Expr, name: Name },
    /// `add <expr> to <list>`
    Append { value: Expr, list: Name },
    /// `get item <index> from <list> as <name>`
    GetItem { index: Expr, list: Name, name: Name },
    /// `size of <list> as <name>`
    SizeOf { list: Name, name: Name },
    /// `ask <prompt> and remember it as <name>`
    Ask { prompt: Expr, name: Name },
    /// `if <condition> then`
    If { condition: Condition },
    /// `otherwise`
    Otherwise,
    /// `repeat <expr> times`
    Repeat { times: Expr },
    /// `count from <expr> to <expr> as <name>`
    Count { from: Expr, to: Expr, name: Name },
    /// `for each item in <list> as <name>`
    ForEach { list: Name, name: Name },
    /// `learn how to <name> [with <p1> and <p2> ...]`
    Learn { name: Name, params: Vec<Name> },
    /// `do <name> [with <a1> and <a2> ...]`
    Do { name: Name, args: Vec<Expr> },
    /// `end`
    End,
    /// Empty line or `//` comment.
    Blank,
}

impl Stmt {
    /// Short keyword naming the statement kind, for tracing and diagnostics.
    pub fn keyword(&self) -> &'static str {
        match self {
            Stmt::Say { .. } => "say",
            Stmt::Remember { .. } => "remember",
            Stmt::MakeList { .. } => "list",
            Stmt::Append { .. } => "add",
            Stmt::GetItem { .. } => "get item",
            Stmt::SizeOf { .. } => "size of",
            Stmt::Ask { .. } => "ask",
            Stmt::If { .. } => "if",
            Stmt::Otherwise => "otherwise",
            Stmt::Repeat { .. } => "repeat",
            Stmt::Count { .. } => "count",
            Stmt::ForEach { .. } => "for each",
            Stmt::Learn { .. } => "learn",
            Stmt::Do { .. } => "do",
            Stmt::End => "end",
            Stmt::Blank => "blank",
        }
    }

    /// Returns `true` for statements whose body runs up to a matching `end`.
    pub fn opens_block(&self) -> bool {
        matches!(
            self,
            Stmt::If { .. }
                | Stmt::Repeat { .. }
                | Stmt::Count { .. }
                | Stmt::ForEach { .. }
                | Stmt::Learn { .. }
        )
    }

    /// The keyword of the block this statement opens, if it opens one.
    pub fn block_keyword(&self) -> Option<&'static str> {
        self.opens_block().then_some(self.keyword())
    }
}
