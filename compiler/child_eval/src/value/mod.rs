//! Runtime values.

use std::fmt;

use child_ir::literal::{format_float, quote_str};

/// A value bound to a name or produced by an expression.
///
/// Lists own their elements: `remember L as M` copies, so later changes to
/// `L` are not seen through `M`.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    List(Vec<Value>),
}

impl Value {
    /// Name of the value's kind, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "number",
            Value::Float(_) => "decimal number",
            Value::Str(_) => "text",
            Value::Bool(_) => "true/false",
            Value::List(_) => "list",
        }
    }

    /// Convert to an integer for counts, bounds and indexes.
    ///
    /// Floats truncate toward zero, booleans are 0 and 1, and text must hold
    /// a whole number. Lists and non-finite floats have no integer value.
    pub fn to_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f) => float_to_int(*f),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Str(s) => s.trim().parse().ok(),
            Value::List(_) => None,
        }
    }

    /// Numeric view for arithmetic and ordering: booleans count as 0 and 1.
    pub(crate) fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(f) => Some(Number::Float(*f)),
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::Str(_) | Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Literal form: strings quoted, everything else as displayed.
    ///
    /// Used inside list rendering and when echoing an expression with its
    /// variables substituted.
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => quote_str(s),
            other => other.to_string(),
        }
    }
}

#[expect(clippy::cast_possible_truncation, reason = "range checked before the cast")]
fn float_to_int(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let t = f.trunc();
    if t.is_finite() && t >= -LIMIT && t < LIMIT {
        Some(t as i64)
    } else {
        None
    }
}

/// Numeric operand after bool promotion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[expect(clippy::cast_precision_loss, reason = "int to float promotion")]
    pub(crate) fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&item.repr())?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Equality as used by `is` and `is not`.
///
/// Numbers compare by value across int, float and bool (`1 is 1.0`); other
/// kinds are equal only to the same kind with equal contents.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return match (a, b) {
                (Number::Int(x), Number::Int(y)) => x == y,
                _ => a.to_f64() == b.to_f64(),
            };
        }
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
mod tests;
