//! Expression evaluation against an [`Environment`].
//!
//! Evaluation is a read-only walk over the parsed tree. Faults carry the
//! low-level reason; [`evaluate`] lifts them to statement-level errors with
//! the expression rendered as it was actually evaluated.

use child_ir::Expr;

use crate::operators::{evaluate_binary, evaluate_unary};
use crate::stack::ensure_sufficient_stack;
use crate::{Environment, EvalErrorKind, ExprFault, Value};

/// Evaluate `expr`, converting faults into statement errors.
pub fn evaluate(expr: &Expr, env: &Environment) -> Result<Value, EvalErrorKind> {
    eval_expr(expr, env).map_err(|fault| match fault {
        ExprFault::IndexOutOfRange { target, index, len } => {
            EvalErrorKind::IndexOutOfRange { target, index, len }
        }
        fault => EvalErrorKind::Unevaluable {
            expr: expr.render_with(&|name| env.lookup(name).map(Value::repr)),
            fault,
        },
    })
}

/// Evaluate `expr` to a value.
pub fn eval_expr(expr: &Expr, env: &Environment) -> Result<Value, ExprFault> {
    ensure_sufficient_stack(|| match expr {
        Expr::Int(n) => Ok(Value::Int(*n)),
        Expr::Float(f) => Ok(Value::Float(*f)),
        Expr::Str(s) => Ok(Value::Str(s.clone())),
        Expr::Bool(b) => Ok(Value::Bool(*b)),
        Expr::Ident(name) => env
            .lookup(name)
            .cloned()
            .ok_or_else(|| ExprFault::UndefinedName { name: name.clone() }),
        Expr::List(items) => items
            .iter()
            .map(|item| eval_expr(item, env))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        Expr::Index { target, index } => {
            let container = eval_expr(target, env)?;
            let position = eval_expr(index, env)?;
            let index = position.to_int().ok_or(ExprFault::BadIndex {
                type_name: position.type_name(),
            })?;
            let label = target.to_string();
            index_value(&container, index, &label)
        }
        Expr::Unary { op, operand } => evaluate_unary(*op, eval_expr(operand, env)?),
        Expr::Binary { op, left, right } => {
            let l = eval_expr(left, env)?;
            let r = eval_expr(right, env)?;
            evaluate_binary(*op, l, r)
        }
        Expr::Group(inner) => eval_expr(inner, env),
    })
}

/// Pick one element of a list (or one character of a text).
///
/// Negative indexes count from the end. `label` names the container in the
/// out-of-range message.
pub fn index_value(container: &Value, index: i64, label: &str) -> Result<Value, ExprFault> {
    match container {
        Value::List(items) => list_item(items, index, label),
        Value::Str(s) => {
            let i = resolve_index(index, s.chars().count(), label)?;
            Ok(Value::Str(s.chars().nth(i).map(String::from).unwrap_or_default()))
        }
        other => Err(ExprFault::NotIndexable {
            type_name: other.type_name(),
        }),
    }
}

/// The element of `items` at `index`, counting from the end when negative.
pub fn list_item(items: &[Value], index: i64, label: &str) -> Result<Value, ExprFault> {
    let i = resolve_index(index, items.len(), label)?;
    Ok(items[i].clone())
}

fn resolve_index(index: i64, len: usize, label: &str) -> Result<usize, ExprFault> {
    let out_of_range = || ExprFault::IndexOutOfRange {
        target: label.to_string(),
        index,
        len,
    };
    let resolved = if index < 0 {
        len.checked_sub(usize::try_from(index.unsigned_abs()).map_err(|_| out_of_range())?)
    } else {
        usize::try_from(index).ok()
    };
    match resolved {
        Some(i) if i < len => Ok(i),
        _ => Err(out_of_range()),
    }
}

/// Coerce a line typed at an `ask` prompt.
///
/// Numeric text becomes a number: whole values become integers, anything
/// else a decimal. Everything else stays text.
pub fn coerce_input(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Int(n);
    }
    match trimmed.parse::<f64>() {
        Ok(f) => match Value::Float(f).to_int() {
            Some(n) if f.fract() == 0.0 => Value::Int(n),
            _ => Value::Float(f),
        },
        _ => Value::Str(raw.to_string()),
    }
}
