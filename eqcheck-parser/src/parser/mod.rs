//! A parser for normalized answer strings.
//!
//! The grammar is deliberately small, matching what exercises actually ask
//! for:
//!
//! ```text
//! expr       := polynomial ("/" polynomial)?     -- "/" outside parentheses
//! polynomial := ("(" polynomial ")") | sign? term (sign term)*
//! term       := factor ("*"? factor)*
//! factor     := (number | letter) ("**" integer)?
//! ```
//!
//! Variables are single lowercase letters. Nested grouping, function calls
//! (`sin(x)`, `sqrt(x)`), and negative or fractional exponents are outside
//! the grammar on purpose: the original grading behavior degrades such input
//! to a constant fallback, and widening the grammar would silently change
//! which answers existing exercises accept.

pub mod error;

use crate::ast::{Expr, Term};
use crate::tokenizer::{tokenize, Token, TokenKind};
use error::ParseError;
use std::collections::BTreeMap;
use std::iter::Peekable;
use std::slice::Iter;

/// Parses a normalized answer string into an [`Expr`].
///
/// This function is total. Input the grammar cannot express degrades to a
/// bare constant: the float value of the whole string if it reads as one,
/// zero otherwise.
pub fn parse(normalized: &str) -> Expr {
    match try_parse(normalized) {
        Ok(expr) => expr,
        Err(_) => Expr::Number(fallback_value(normalized)),
    }
}

/// Parses a normalized answer string, surfacing the failure instead of
/// degrading to the constant fallback.
pub fn try_parse(normalized: &str) -> Result<Expr, ParseError> {
    // fast path: the whole string is a plain number
    if let Ok(value) = normalized.parse::<f64>() {
        if value.is_finite() {
            return Ok(Expr::Number(value));
        }
    }

    let tokens = lex(normalized)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpr);
    }

    match fraction_split(&tokens)? {
        Some((numerator, denominator)) => Ok(Expr::Fraction {
            numerator: parse_polynomial(numerator)?,
            denominator: parse_polynomial(denominator)?,
        }),
        None => Ok(Expr::Polynomial(parse_polynomial(&tokens)?)),
    }
}

/// The value of the constant fallback for input the grammar rejects.
fn fallback_value(normalized: &str) -> f64 {
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn lex(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        match kind {
            Ok(TokenKind::Symbol) | Err(()) => return Err(ParseError::UnrecognizedCharacter),
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
        }
    }

    Ok(tokens)
}

/// Splits the token stream on the single fraction bar outside parentheses,
/// if any. More than one such bar is malformed: the grammar covers simple
/// fractions, not general rational expressions.
fn fraction_split<'a>(
    tokens: &'a [Token<'a>],
) -> Result<Option<(&'a [Token<'a>], &'a [Token<'a>])>, ParseError> {
    let mut depth = 0usize;
    let mut split = None;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => depth = depth.saturating_sub(1),
            TokenKind::Div if depth == 0 => {
                if split.is_some() {
                    return Err(ParseError::ExtraFractionBar);
                }
                split = Some(i);
            },
            _ => (),
        }
    }

    Ok(split.map(|i| (&tokens[..i], &tokens[i + 1..])))
}

/// Parses a run of tokens as a sum of terms.
///
/// The stream is split on `+`/`-` outside parentheses, tracking the sign
/// attached to each chunk; empty chunks from consecutive operators are
/// discarded. A polynomial fully enclosed in one balanced paren pair is
/// unwrapped first, so `(x+1)/2` parses; grouping anywhere else is an error.
fn parse_polynomial(tokens: &[Token]) -> Result<Vec<Term>, ParseError> {
    let tokens = strip_enclosing_parens(tokens);

    let mut terms = Vec::new();
    let mut sign = 1.0;
    let mut start = 0;
    let mut depth = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => depth = depth.saturating_sub(1),
            TokenKind::Add | TokenKind::Sub if depth == 0 => {
                let chunk = &tokens[start..i];
                if !chunk.is_empty() {
                    terms.push(parse_term(sign, chunk)?);
                }
                sign = if token.kind == TokenKind::Sub { -1.0 } else { 1.0 };
                start = i + 1;
            },
            _ => (),
        }
    }

    let chunk = &tokens[start..];
    if !chunk.is_empty() {
        terms.push(parse_term(sign, chunk)?);
    }

    if terms.is_empty() {
        return Err(ParseError::EmptyExpr);
    }

    Ok(terms)
}

/// Strips paren pairs that enclose the entire token run.
fn strip_enclosing_parens<'a>(mut tokens: &'a [Token<'a>]) -> &'a [Token<'a>] {
    while tokens.len() >= 2 && encloses(tokens) {
        tokens = &tokens[1..tokens.len() - 1];
    }
    tokens
}

/// Returns true if the first token is an open paren whose matching close
/// paren is the final token.
fn encloses(tokens: &[Token]) -> bool {
    let mut depth = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
                if depth == 0 {
                    return i == tokens.len() - 1;
                }
            },
            _ if i == 0 => return false,
            _ => (),
        }
    }

    false
}

/// Parses one signed chunk into a [`Term`].
///
/// The chunk is a sequence of factors, optionally separated by `*`. Number
/// factors multiply into the coefficient (so `3*2` is the constant 6);
/// letter factors accumulate exponents, and a letter appearing twice adds
/// its exponents (`x*x` is `x^2`).
fn parse_term(sign: f64, tokens: &[Token]) -> Result<Term, ParseError> {
    let mut coefficient = sign;
    let mut variables = BTreeMap::new();
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        match token.kind {
            TokenKind::Mul => continue,
            TokenKind::Int | TokenKind::Float => {
                let value = token
                    .lexeme
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber)?;
                let exp = exponent(&mut iter)?;
                coefficient *= value.powi(exp);
            },
            TokenKind::Letter => {
                // the Letter token is a single ASCII character by definition
                let var = token.lexeme.chars().next().ok_or(ParseError::EmptyExpr)?;
                let exp = exponent(&mut iter)?;
                if exp > 0 {
                    let entry = variables.entry(var).or_insert(0u32);
                    *entry = entry
                        .checked_add(exp as u32)
                        .ok_or(ParseError::InvalidExponent)?;
                }
            },
            kind => return Err(ParseError::UnexpectedToken(kind)),
        }
    }

    if !coefficient.is_finite() {
        return Err(ParseError::InvalidNumber);
    }

    Ok(Term { coefficient, variables })
}

/// Consumes a `**<integer>` suffix if present; an absent suffix means
/// exponent 1. Negative and fractional exponents are outside the grammar.
fn exponent(iter: &mut Peekable<Iter<'_, Token<'_>>>) -> Result<i32, ParseError> {
    match iter.peek() {
        Some(token) if token.kind == TokenKind::Pow => {
            iter.next();
            match iter.next() {
                Some(token) if token.kind.is_number() => token
                    .lexeme
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidExponent),
                _ => Err(ParseError::InvalidExponent),
            }
        },
        _ => Ok(1),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn term(coefficient: f64, variables: &[(char, u32)]) -> Term {
        Term {
            coefficient,
            variables: variables.iter().copied().collect(),
        }
    }

    #[test]
    fn bare_number() {
        assert_eq!(parse("42"), Expr::Number(42.0));
        assert_eq!(parse("-2.5"), Expr::Number(-2.5));
    }

    #[test]
    fn linear_polynomial() {
        assert_eq!(
            parse("2*x+3"),
            Expr::Polynomial(vec![term(2.0, &[('x', 1)]), Term::constant(3.0)]),
        );
    }

    #[test]
    fn leading_minus() {
        assert_eq!(
            parse("-x+1"),
            Expr::Polynomial(vec![term(-1.0, &[('x', 1)]), Term::constant(1.0)]),
        );
    }

    #[test]
    fn exponents() {
        assert_eq!(
            parse("x**2-2*x"),
            Expr::Polynomial(vec![term(1.0, &[('x', 2)]), term(-2.0, &[('x', 1)])]),
        );
    }

    #[test]
    fn repeated_letter_adds_exponents() {
        assert_eq!(
            parse("x*x*y"),
            Expr::Polynomial(vec![term(1.0, &[('x', 2), ('y', 1)])]),
        );
    }

    #[test]
    fn adjacent_letters_multiply() {
        assert_eq!(
            parse("2*xy"),
            Expr::Polynomial(vec![term(2.0, &[('x', 1), ('y', 1)])]),
        );
    }

    #[test]
    fn numeric_product_folds_into_coefficient() {
        assert_eq!(parse("3*2"), Expr::Polynomial(vec![Term::constant(6.0)]));
    }

    #[test]
    fn numeric_power() {
        assert_eq!(parse("2**3"), Expr::Polynomial(vec![Term::constant(8.0)]));
    }

    #[test]
    fn zero_exponent_drops_the_variable() {
        assert_eq!(parse("x**0"), Expr::Polynomial(vec![Term::constant(1.0)]));
    }

    #[test]
    fn simple_fraction() {
        assert_eq!(
            parse("(x+1)/2"),
            Expr::Fraction {
                numerator: vec![term(1.0, &[('x', 1)]), Term::constant(1.0)],
                denominator: vec![Term::constant(2.0)],
            },
        );
    }

    #[test]
    fn fraction_without_parens() {
        assert_eq!(
            parse("1/3"),
            Expr::Fraction {
                numerator: vec![Term::constant(1.0)],
                denominator: vec![Term::constant(3.0)],
            },
        );
    }

    #[test]
    fn two_fraction_bars_fall_back_to_zero() {
        assert_eq!(try_parse("1/2/3"), Err(ParseError::ExtraFractionBar));
        assert_eq!(parse("1/2/3"), Expr::Number(0.0));
    }

    #[test]
    fn function_calls_fall_back_to_zero() {
        // `sin(x)` normalizes to `sin*(x)`; the paren mid-term is rejected
        assert!(try_parse("sin*(x)").is_err());
        assert_eq!(parse("sin*(x)"), Expr::Number(0.0));
    }

    #[test]
    fn negative_exponent_is_rejected() {
        assert_eq!(try_parse("x**-2"), Err(ParseError::InvalidExponent));
    }

    #[test]
    fn fractional_exponent_is_rejected() {
        assert_eq!(try_parse("x**2.5"), Err(ParseError::InvalidExponent));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(try_parse(""), Err(ParseError::EmptyExpr));
        assert_eq!(parse(""), Expr::Number(0.0));
    }

    #[test]
    fn missing_denominator_is_rejected() {
        assert_eq!(try_parse("1/"), Err(ParseError::EmptyExpr));
    }

    #[test]
    fn unknown_characters_are_rejected() {
        assert_eq!(try_parse("√3"), Err(ParseError::UnrecognizedCharacter));
        assert_eq!(parse("√3"), Expr::Number(0.0));
    }

    #[test]
    fn infinity_is_not_a_number() {
        // `f64::from_str` accepts "inf", but the grammar does not
        assert!(try_parse("inf").is_ok_and(|expr| expr != Expr::Number(f64::INFINITY)));
    }
}
