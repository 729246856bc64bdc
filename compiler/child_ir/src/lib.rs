//! CHILD IR - statement and expression types shared by the parser and evaluator.
//!
//! A CHILD program is a sequence of lines. Each line classifies into exactly one
//! [`Stmt`]; the expressions inside a statement are small [`Expr`] trees.
//!
//! # Modules
//!
//! - `expr`: expression tree and operators
//! - `stmt`: statement kinds and the [`Condition`] form used by `if`
//! - `keywords`: block-opening keywords and name validation
//! - `literal`: literal rendering shared by expressions and runtime values

mod expr;
pub mod keywords;
pub mod literal;
mod stmt;

pub use expr::{BinaryOp, Expr, UnaryOp};
pub use keywords::{block_keyword, is_valid_name, opens_block, strip_keyword, BLOCK_OPENERS};
pub use stmt::{CompareOp, Condition, Stmt};

/// A variable, parameter, or procedure name as written in the source.
pub type Name = String;
