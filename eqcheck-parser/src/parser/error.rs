use crate::tokenizer::TokenKind;
use std::fmt::{self, Display, Formatter};

/// An error produced while parsing a normalized answer string.
///
/// Parse errors never cross the public boundary of the pipeline:
/// [`parse`](crate::parser::parse) maps every one of them to the constant
/// fallback expression, and the comparison layer falls back to loose string
/// comparison. They exist so the fallback is an explicit branch rather than a
/// catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no tokens, or a polynomial position was empty
    /// (for example the denominator of `1/`).
    EmptyExpr,

    /// A character outside the answer grammar.
    UnrecognizedCharacter,

    /// More than one fraction bar outside parentheses. The grammar covers a
    /// single simple fraction, not general rational expressions.
    ExtraFractionBar,

    /// A token that cannot appear inside a term: grouping mid-term, function
    /// calls, and similar structure the answer grammar does not cover.
    UnexpectedToken(TokenKind),

    /// An exponent that is not a non-negative integer.
    InvalidExponent,

    /// A numeric literal or coefficient that does not fit in a finite `f64`.
    InvalidNumber,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyExpr => write!(f, "expected an expression"),
            ParseError::UnrecognizedCharacter => write!(f, "unrecognized character"),
            ParseError::ExtraFractionBar => write!(f, "more than one top-level fraction bar"),
            ParseError::UnexpectedToken(kind) => write!(f, "unexpected token: {kind:?}"),
            ParseError::InvalidExponent => {
                write!(f, "exponents must be non-negative integers")
            },
            ParseError::InvalidNumber => write!(f, "number is out of range"),
        }
    }
}

impl std::error::Error for ParseError {}
