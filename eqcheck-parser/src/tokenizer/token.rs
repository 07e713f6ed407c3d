use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can appear in a normalized answer
/// string.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    /// The power marker the preprocessor rewrites `^` into.
    #[token("**")]
    Pow,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A variable. Only a single lowercase letter is a variable; a longer run
    /// of letters lexes as a sequence of these, and the parser rejects the
    /// sequences it cannot read as a product of variables (`sin(`, `sqrt(`).
    #[regex(r"[a-z]")]
    Letter,

    #[regex(r"[0-9]+\.?")]
    Int,

    #[regex(r"[0-9]*\.[0-9]+")]
    Float,

    /// Any other character. Always rejected by the parser; kept as a token so
    /// the tokenizer itself is total.
    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token is a numeric literal.
    pub fn is_number(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the normalized string this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
