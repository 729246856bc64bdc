//! Expression tokenizer for CHILD.
//!
//! Statement structure (`remember ... as ...`) is recognised by the line
//! classifier in `child_parse`; this crate only tokenizes the expression
//! fragments between the keywords. String literals are single tokens, so a
//! variable name appearing inside quotes is never mistaken for a reference.

use std::ops::Range;

use logos::Logos;
use thiserror::Error;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,

    #[token("true")]
    #[token("True")]
    True,
    #[token("false")]
    #[token("False")]
    False,

    // Literals
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| unescape(lex.slice()))]
    #[regex(r#"'([^'\\]|\\.)*'"#, |lex| unescape(lex.slice()))]
    Str(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
}

impl Token {
    /// Human-readable description used in parse errors.
    pub fn describe(&self) -> String {
        match self {
            Token::Plus => "`+`".to_string(),
            Token::Minus => "`-`".to_string(),
            Token::Star => "`*`".to_string(),
            Token::Slash => "`/`".to_string(),
            Token::LParen => "`(`".to_string(),
            Token::RParen => "`)`".to_string(),
            Token::LBracket => "`[`".to_string(),
            Token::RBracket => "`]`".to_string(),
            Token::Comma => "`,`".to_string(),
            Token::True => "`true`".to_string(),
            Token::False => "`false`".to_string(),
            Token::Int(n) => format!("number `{n}`"),
            Token::Float(f) => format!("number `{f}`"),
            Token::Str(_) => "text".to_string(),
            Token::Ident(name) => format!("name `{name}`"),
        }
    }
}

/// A token together with its byte range in the expression text.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Range<usize>,
}

pub type SpannedToken = Spanned<Token>;

/// Tokenization failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("number `{text}` is too large")]
    NumberTooLarge { text: String, offset: usize },
    #[error("unterminated text starting at `{text}`")]
    UnterminatedString { text: String, offset: usize },
    #[error("unexpected `{text}`")]
    Unexpected { text: String, offset: usize },
}

/// Tokenize an expression fragment.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push(Spanned { value: token, span }),
            Err(()) => return Err(classify_error(source, span)),
        }
    }
    Ok(tokens)
}

fn classify_error(source: &str, span: Range<usize>) -> LexError {
    let offset = span.start;
    let text = &source[span];
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return LexError::NumberTooLarge {
            text: text.to_string(),
            offset,
        };
    }
    if text.starts_with('"') || text.starts_with('\'') {
        return LexError::UnterminatedString {
            text: source[offset..].to_string(),
            offset,
        };
    }
    LexError::Unexpected {
        text: text.to_string(),
        offset,
    }
}

/// Strip the quotes from a string literal and resolve escapes.
///
/// Unknown escapes keep their backslash, so `"C:\dir"` reads as written.
fn unescape(literal: &str) -> Option<String> {
    let inner = literal.get(1..literal.len().checked_sub(1)?)?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Some(out)
}
