//! CHILD Parse - turns source lines into classified statements.
//!
//! A CHILD program is never parsed into a single tree. Instead every line is
//! classified once into a [`Stmt`](child_ir::Stmt) and block boundaries are
//! resolved on demand by scanning the line array:
//!
//! - [`classify`]: one trimmed line to one statement, with typed fields
//! - [`parse_expr`]: recursive-descent parser for the expression fragments
//! - [`parse_condition`]: `left <phrase> right` with priority-ordered phrases
//! - [`Program`]: the immutable line array plus the block resolver
//!   (`find_matching_end`, `find_otherwise`)
//! - [`check`]: static pass used by `child check`
//!
//! Syntax errors are stored per line rather than raised eagerly: a malformed
//! line only fails the run when it is actually executed.

mod blocks;
mod check;
mod condition;
mod error;
mod expr;
mod line;
mod program;
pub mod split;

pub use blocks::BlockError;
pub use check::{check, Finding, FindingKind};
pub use condition::parse_condition;
pub use error::{ExprSyntaxError, SyntaxError, Usage};
pub use expr::parse_expr;
pub use line::classify;
pub use program::{Line, Program};
