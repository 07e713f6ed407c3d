//! The expression data model produced by the parser.
//!
//! Expressions are plain value objects: built once per comparison from the
//! source string, never mutated, never cached.

pub mod expr;
pub mod term;

pub use expr::Expr;
pub use term::Term;
