//! Expression tree.
//!
//! Expressions are parsed once per line and evaluated many times (loop bodies,
//! procedure bodies), so the tree owns its literals.

use std::fmt;

use crate::literal::{format_float, quote_str};
use crate::Name;

/// Binary arithmetic operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Source symbol for the operator.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Plus,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
        }
    }
}

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    /// Variable reference.
    Ident(Name),
    /// List literal `[a, b, c]`.
    List(Vec<Expr>),
    /// Indexed access `target[index]`.
    Index { target: Box<Expr>, index: Box<Expr> },
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Parenthesized expression, kept so rendering matches the source.
    Group(Box<Expr>),
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn index(target: Expr, index: Expr) -> Self {
        Expr::Index {
            target: Box::new(target),
            index: Box::new(index),
        }
    }

    /// Render the expression, replacing each identifier for which `resolve`
    /// returns a literal.
    ///
    /// Used for error messages: the evaluator passes a resolver that looks the
    /// name up in the environment, so the message shows the expression as it
    /// was actually evaluated (`'15' + 1` rather than `age + 1`).
    pub fn render_with(&self, resolve: &dyn Fn(&str) -> Option<String>) -> String {
        let mut out = String::new();
        self.render_into(&mut out, resolve);
        out
    }

    fn render_into(&self, out: &mut String, resolve: &dyn Fn(&str) -> Option<String>) {
        match self {
            Expr::Int(n) => out.push_str(&n.to_string()),
            Expr::Float(f) => out.push_str(&format_float(*f)),
            Expr::Str(s) => out.push_str(&quote_str(s)),
            Expr::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Expr::Ident(name) => match resolve(name) {
                Some(literal) => out.push_str(&literal),
                None => out.push_str(name),
            },
            Expr::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.render_into(out, resolve);
                }
                out.push(']');
            }
            Expr::Index { target, index } => {
                target.render_into(out, resolve);
                out.push('[');
                index.render_into(out, resolve);
                out.push(']');
            }
            Expr::Unary { op, operand } => {
                out.push_str(op.as_symbol());
                operand.render_into(out, resolve);
            }
            Expr::Binary { op, left, right } => {
                left.render_into(out, resolve);
                out.push(' ');
                out.push_str(op.as_symbol());
                out.push(' ');
                right.render_into(out, resolve);
            }
            Expr::Group(inner) => {
                out.push('(');
                inner.render_into(out, resolve);
                out.push(')');
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&|_| None))
    }
}
