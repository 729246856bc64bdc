//! Operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over the fixed set of value kinds. Integer
//! arithmetic is checked: overflow is a fault, never a wrap.

use std::cmp::Ordering;

use child_ir::{BinaryOp, CompareOp, UnaryOp};

use crate::value::Number;
use crate::{EvalErrorKind, ExprFault, Value};

/// Longest string or list that `*` may build.
const MAX_REPEAT_LEN: usize = 1 << 24;

type OpResult = Result<Value, ExprFault>;

/// Evaluate a binary operation.
pub fn evaluate_binary(op: BinaryOp, left: Value, right: Value) -> OpResult {
    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        return eval_numeric(op, a, b);
    }
    match (op, left, right) {
        (BinaryOp::Add, Value::Str(mut a), Value::Str(b)) => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        (BinaryOp::Add, Value::List(mut a), Value::List(b)) => {
            a.extend(b);
            Ok(Value::List(a))
        }
        (BinaryOp::Mul, Value::Str(s), n) | (BinaryOp::Mul, n, Value::Str(s))
            if is_count(&n) =>
        {
            let times = repeat_count(&n, s.len())?;
            Ok(Value::Str(s.repeat(times)))
        }
        (BinaryOp::Mul, Value::List(items), n) | (BinaryOp::Mul, n, Value::List(items))
            if is_count(&n) =>
        {
            let times = repeat_count(&n, items.len())?;
            Ok(Value::List(repeat_list(&items, times)))
        }
        (op, left, right) => Err(ExprFault::BinaryTypeMismatch {
            op: op.as_symbol(),
            left: left.type_name(),
            right: right.type_name(),
        }),
    }
}

/// Evaluate a prefix operation.
pub fn evaluate_unary(op: UnaryOp, operand: Value) -> OpResult {
    match (op, operand.as_number()) {
        (UnaryOp::Neg, Some(Number::Int(n))) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or(ExprFault::Overflow { op: "-" }),
        (UnaryOp::Neg, Some(Number::Float(f))) => Ok(Value::Float(-f)),
        (UnaryOp::Plus, Some(Number::Int(n))) => Ok(Value::Int(n)),
        (UnaryOp::Plus, Some(Number::Float(f))) => Ok(Value::Float(f)),
        (op, None) => Err(ExprFault::UnaryTypeMismatch {
            op: op.as_symbol(),
            operand: operand.type_name(),
        }),
    }
}

/// Evaluate an `if` comparison.
///
/// `is` and `is not` work on any pair of values. `is bigger than` and
/// `is smaller than` need two numbers, two texts, or two lists.
pub fn compare(op: CompareOp, left: &Value, right: &Value) -> Result<bool, EvalErrorKind> {
    match op {
        CompareOp::Is => Ok(left == right),
        CompareOp::IsNot => Ok(left != right),
        CompareOp::Bigger => Ok(order(left, right)? == Some(Ordering::Greater)),
        CompareOp::Smaller => Ok(order(left, right)? == Some(Ordering::Less)),
    }
}

/// `None` when the values are unordered (a NaN is involved).
fn order(left: &Value, right: &Value) -> Result<Option<Ordering>, EvalErrorKind> {
    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        return Ok(match (a, b) {
            (Number::Int(x), Number::Int(y)) => Some(x.cmp(&y)),
            _ => a.to_f64().partial_cmp(&b.to_f64()),
        });
    }
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        (Value::List(a), Value::List(b)) => {
            for (x, y) in a.iter().zip(b) {
                if x != y {
                    return order(x, y);
                }
            }
            Ok(Some(a.len().cmp(&b.len())))
        }
        _ => Err(EvalErrorKind::Incomparable {
            left: left.type_name(),
            right: right.type_name(),
        }),
    }
}

fn eval_numeric(op: BinaryOp, a: Number, b: Number) -> OpResult {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => eval_int(op, x, y),
        _ => eval_float(op, a.to_f64(), b.to_f64()),
    }
}

fn eval_int(op: BinaryOp, a: i64, b: i64) -> OpResult {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        // `/` always produces a decimal number.
        BinaryOp::Div => {
            return eval_float(op, Number::Int(a).to_f64(), Number::Int(b).to_f64());
        }
    };
    result.map(Value::Int).ok_or(ExprFault::Overflow {
        op: op.as_symbol(),
    })
}

fn eval_float(op: BinaryOp, a: f64, b: f64) -> OpResult {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(ExprFault::DivisionByZero);
            }
            a / b
        }
    };
    Ok(Value::Float(result))
}

fn is_count(value: &Value) -> bool {
    matches!(value, Value::Int(_) | Value::Bool(_))
}

/// Clamp a repeat count to zero and reject results over the size limit.
fn repeat_count(count: &Value, unit: usize) -> Result<usize, ExprFault> {
    let n = count.to_int().unwrap_or(0);
    let times = usize::try_from(n).unwrap_or(0);
    if unit == 0 {
        return Ok(0);
    }
    match times.checked_mul(unit) {
        Some(total) if total <= MAX_REPEAT_LEN => Ok(times),
        _ => Err(ExprFault::Overflow { op: "*" }),
    }
}

fn repeat_list(items: &[Value], times: usize) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len().saturating_mul(times));
    for _ in 0..times {
        out.extend_from_slice(items);
    }
    out
}
