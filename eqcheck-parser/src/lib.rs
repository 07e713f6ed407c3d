//! Parsing of free-text math answers into structured expressions.
//!
//! This crate is the front half of the answer-equivalence pipeline: it
//! normalizes a raw answer string ([`preprocess::normalize`]), lexes it
//! ([`tokenizer`]), and parses it into an [`ast::Expr`] ([`parser::parse`]).
//! The grammar is intentionally small — sums of monomials in single-letter
//! variables, and simple fractions of those — because that is the shape of
//! the answers the exercises ask for. Anything outside the grammar degrades
//! to a constant fallback rather than an error; see [`parser`] for details.

pub mod ast;
pub mod parser;
pub mod preprocess;
pub mod tokenizer;
