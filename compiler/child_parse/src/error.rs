//! Syntax errors found while classifying a line.

use std::fmt;

use child_lexer::LexError;
use thiserror::Error;

/// Statement forms, used to print the expected shape of a malformed line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Usage {
    Say,
    Remember,
    MakeList,
    Append,
    GetItem,
    SizeOf,
    Ask,
    If,
    Repeat,
    Count,
    ForEach,
    Learn,
    Do,
}

impl Usage {
    /// The statement shape with placeholders.
    pub fn pattern(self) -> &'static str {
        match self {
            Usage::Say => "say VALUE",
            Usage::Remember => "remember VALUE as NAME",
            Usage::MakeList => "list [item1, item2, ...] as NAME",
            Usage::Append => "add VALUE to LISTNAME",
            Usage::GetItem => "get item NUMBER from LISTNAME as NAME",
            Usage::SizeOf => "size of LISTNAME as NAME",
            Usage::Ask => "ask \"question\" and remember it as NAME",
            Usage::If => "if CONDITION then",
            Usage::Repeat => "repeat NUMBER times",
            Usage::Count => "count from NUMBER to NUMBER as NAME",
            Usage::ForEach => "for each item in LISTNAME as NAME",
            Usage::Learn => "learn how to NAME with PARAM and PARAM",
            Usage::Do => "do NAME with VALUE and VALUE",
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "use '{}'", self.pattern())
    }
}

/// Why an expression fragment could not be parsed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ExprSyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("nothing to evaluate")]
    Empty,
    #[error("expected {expected}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: String,
    },
    #[error("expected {expected} but the expression ended")]
    UnexpectedEnd { expected: &'static str },
    #[error("unexpected {found} after the end of the expression")]
    Trailing { found: String },
    #[error("expression is nested too deeply")]
    TooDeep,
}

/// A line that cannot be classified into a statement.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SyntaxError {
    #[error("don't understand this command: {text}")]
    UnknownCommand { text: String },
    /// Required separator missing or repeated.
    #[error("{usage}")]
    Malformed { usage: Usage, text: String },
    #[error("'{name}' can't be used as a name (use letters, digits and _)")]
    InvalidName { name: String },
    #[error("'{name}' is listed twice in 'learn how to {procedure}'")]
    DuplicateParameter { procedure: String, name: String },
    #[error("don't understand this condition: {text}")]
    UnrecognizedCondition { text: String },
    #[error("can't understand this expression: {text} ({reason})")]
    Expression {
        text: String,
        reason: ExprSyntaxError,
    },
}
