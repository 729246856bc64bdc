//! Recursive-descent expression parser.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! expr           = additive
//! additive       = multiplicative (("+" | "-") multiplicative)*
//! multiplicative = unary (("*" | "/") unary)*
//! unary          = ("-" | "+") unary | postfix
//! postfix        = primary ("[" expr "]")*
//! primary        = INT | FLOAT | STRING | "true" | "false" | NAME
//!                | "(" expr ")" | "[" (expr ("," expr)* ","?)? "]"
//! ```

use child_ir::{BinaryOp, Expr, UnaryOp};
use child_lexer::{tokenize, SpannedToken, Token};

use crate::ExprSyntaxError;

/// Maximum nesting of parentheses, brackets and prefix operators.
const MAX_NESTING: usize = 256;

/// Parse one expression fragment.
pub fn parse_expr(text: &str) -> Result<Expr, ExprSyntaxError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ExprSyntaxError::Empty);
    }
    let mut parser = ExprParser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.parse_additive()?;
    if let Some(token) = parser.peek() {
        return Err(ExprSyntaxError::Trailing {
            found: token.describe(),
        });
    }
    Ok(expr)
}

struct ExprParser {
    tokens: Vec<SpannedToken>,
    pos: usize,
    depth: usize,
}

impl ExprParser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.value)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|t| t.value.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token, what: &'static str) -> Result<(), ExprSyntaxError> {
        match self.bump() {
            Some(ref token) if token == expected => Ok(()),
            Some(token) => Err(ExprSyntaxError::Unexpected {
                expected: what,
                found: token.describe(),
            }),
            None => Err(ExprSyntaxError::UnexpectedEnd { expected: what }),
        }
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ExprSyntaxError>,
    ) -> Result<T, ExprSyntaxError> {
        if self.depth >= MAX_NESTING {
            return Err(ExprSyntaxError::TooDeep);
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.peek()? {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.peek()? {
            Token::Star => Some(BinaryOp::Mul),
            Token::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.peek()? {
            Token::Minus => Some(UnaryOp::Neg),
            Token::Plus => Some(UnaryOp::Plus),
            _ => None,
        }
    }

    fn parse_additive(&mut self) -> Result<Expr, ExprSyntaxError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            self.pos += 1;
            let right = self.parse_multiplicative()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ExprSyntaxError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.pos += 1;
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExprSyntaxError> {
        if let Some(op) = self.match_unary_op() {
            self.pos += 1;
            let operand = self.nested(Self::parse_unary)?;
            return Ok(Expr::unary(op, operand));
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expr, ExprSyntaxError> {
        let mut expr = self.parse_primary()?;
        while self.eat(&Token::LBracket) {
            let index = self.nested(Self::parse_additive)?;
            self.expect(&Token::RBracket, "`]`")?;
            expr = Expr::index(expr, index);
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, ExprSyntaxError> {
        match self.bump() {
            Some(Token::Int(n)) => Ok(Expr::Int(n)),
            Some(Token::Float(f)) => Ok(Expr::Float(f)),
            Some(Token::Str(s)) => Ok(Expr::Str(s)),
            Some(Token::True) => Ok(Expr::Bool(true)),
            Some(Token::False) => Ok(Expr::Bool(false)),
            Some(Token::Ident(name)) => Ok(Expr::Ident(name)),
            Some(Token::LParen) => {
                let inner = self.nested(Self::parse_additive)?;
                self.expect(&Token::RParen, "`)`")?;
                Ok(Expr::Group(Box::new(inner)))
            }
            Some(Token::LBracket) => self.nested(Self::parse_list_tail),
            Some(token) => Err(ExprSyntaxError::Unexpected {
                expected: "a value",
                found: token.describe(),
            }),
            None => Err(ExprSyntaxError::UnexpectedEnd {
                expected: "a value",
            }),
        }
    }

    /// Items of a list literal; the opening `[` is already consumed.
    fn parse_list_tail(&mut self) -> Result<Expr, ExprSyntaxError> {
        let mut items = Vec::new();
        if self.eat(&Token::RBracket) {
            return Ok(Expr::List(items));
        }
        loop {
            items.push(self.parse_additive()?);
            if self.eat(&Token::Comma) {
                // Trailing comma before `]` is allowed.
                if self.eat(&Token::RBracket) {
                    break;
                }
                continue;
            }
            self.expect(&Token::RBracket, "`,` or `]`")?;
            break;
        }
        Ok(Expr::List(items))
    }
}
