pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
///
/// The input is expected to already be normalized (see
/// [`preprocess::normalize`](crate::preprocess::normalize)): lowercase, no
/// whitespace, `**` for exponentiation. Characters the grammar does not know
/// lex as [`TokenKind::Symbol`] rather than failing.
pub fn tokenize(input: &str) -> Lexer<'_, TokenKind> {
    TokenKind::lexer(input)
}
