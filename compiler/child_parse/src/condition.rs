//! Condition parsing for `if`.

use child_ir::{CompareOp, Condition};

use crate::split::split_outside_quotes;
use crate::{parse_expr, SyntaxError};

/// Parse `left <phrase> right`.
///
/// Phrases are tried in [`CompareOp::PRIORITY`] order and the first phrase
/// found outside string literals decides the split. A phrase that occurs more
/// than once makes the condition ambiguous.
pub fn parse_condition(text: &str) -> Result<Condition, SyntaxError> {
    let text = text.trim();
    for op in CompareOp::PRIORITY {
        let parts = split_outside_quotes(text, op.phrase());
        match parts.as_slice() {
            [_] => continue,
            [left, right] => {
                return Ok(Condition {
                    left: operand(left)?,
                    op,
                    right: operand(right)?,
                });
            }
            _ => break,
        }
    }
    Err(SyntaxError::UnrecognizedCondition {
        text: text.to_string(),
    })
}

fn operand(text: &str) -> Result<child_ir::Expr, SyntaxError> {
    let text = text.trim();
    parse_expr(text).map_err(|reason| SyntaxError::Expression {
        text: text.to_string(),
        reason,
    })
}
