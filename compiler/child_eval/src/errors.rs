//! Evaluation errors.
//!
//! [`ExprFault`] is why a single expression failed; [`EvalErrorKind`] is what
//! went wrong with a statement; [`EvalError`] adds the line it happened on.
//! Every kind maps to a stable [`ErrorCode`] for `--explain`.

use child_diagnostic::ErrorCode;
use child_parse::{BlockError, SyntaxError};
use thiserror::Error;

/// Why an expression could not be evaluated.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ExprFault {
    #[error("'{name}' has no value yet")]
    UndefinedName { name: String },
    #[error("can't use '{op}' with {left} and {right}")]
    BinaryTypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("can't use '{op}' with {operand}")]
    UnaryTypeMismatch {
        op: &'static str,
        operand: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("the result of '{op}' is too large")]
    Overflow { op: &'static str },
    #[error("a {type_name} has no items to pick from")]
    NotIndexable { type_name: &'static str },
    #[error("a position must be a whole number, not {type_name}")]
    BadIndex { type_name: &'static str },
    #[error("item {index} doesn't exist in {target} (it has {len} items)")]
    IndexOutOfRange {
        target: String,
        index: i64,
        len: usize,
    },
}

/// What went wrong while executing a statement.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalErrorKind {
    /// The line failed classification; raised when it is executed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Block(#[from] BlockError),
    /// `expr` is the expression with bound names replaced by their values.
    #[error("can't understand this expression: {expr} ({fault})")]
    Unevaluable { expr: String, fault: ExprFault },
    #[error("item {index} doesn't exist in {target} (it has {len} items)")]
    IndexOutOfRange {
        target: String,
        index: i64,
        len: usize,
    },
    #[error("list '{name}' doesn't exist")]
    UndefinedList { name: String },
    #[error("'{name}' is not a list")]
    NotAList { name: String },
    #[error("I don't know how to '{name}'")]
    UnknownProcedure { name: String },
    #[error("'{name}' needs {expected} value(s) but was given {given}")]
    ArityMismatch {
        name: String,
        expected: usize,
        given: usize,
    },
    #[error("{context} needs {expected}, but got {found}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error("can't compare {left} with {right}")]
    Incomparable {
        left: &'static str,
        right: &'static str,
    },
    #[error("too many procedure calls inside each other (the limit is {limit})")]
    RecursionLimit { limit: usize },
    #[error("no input left to answer {prompt}")]
    InputUnavailable { prompt: String },
    #[error("couldn't read the answer to {prompt}: {reason}")]
    InputFailed { prompt: String, reason: String },
}

impl EvalErrorKind {
    /// The diagnostic code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::Syntax(err) => syntax_code(err),
            EvalErrorKind::Block(_) => ErrorCode::E1003,
            EvalErrorKind::Unevaluable { .. } => ErrorCode::E2001,
            EvalErrorKind::IndexOutOfRange { .. } => ErrorCode::E2002,
            EvalErrorKind::UndefinedList { .. } => ErrorCode::E2003,
            EvalErrorKind::NotAList { .. } => ErrorCode::E2004,
            EvalErrorKind::UnknownProcedure { .. } => ErrorCode::E2005,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E2006,
            EvalErrorKind::TypeMismatch { .. } | EvalErrorKind::Incomparable { .. } => {
                ErrorCode::E2007
            }
            EvalErrorKind::RecursionLimit { .. } => ErrorCode::E2008,
            EvalErrorKind::InputUnavailable { .. } | EvalErrorKind::InputFailed { .. } => {
                ErrorCode::E2009
            }
        }
    }

    /// Attach the 1-based line number of the failing statement.
    #[cold]
    pub fn at(self, line: usize) -> EvalError {
        EvalError { kind: self, line }
    }
}

/// The diagnostic code for a classification failure.
pub fn syntax_code(err: &SyntaxError) -> ErrorCode {
    match err {
        SyntaxError::UnknownCommand { .. } => ErrorCode::E1001,
        SyntaxError::Malformed { .. }
        | SyntaxError::InvalidName { .. }
        | SyntaxError::DuplicateParameter { .. } => ErrorCode::E1002,
        SyntaxError::UnrecognizedCondition { .. } => ErrorCode::E1004,
        SyntaxError::Expression { .. } => ErrorCode::E2001,
    }
}

/// A fatal error, stamped with the line of the innermost executing statement.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("error on line {line}: {kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// 1-based source line.
    pub line: usize,
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

pub type EvalResult<T = ()> = Result<T, EvalError>;
