//! Answer-equivalence checking for free-text math answers.
//!
//! Exercise grading cannot compare answer strings literally: `3 + 2x`,
//! `2x+3`, and `3 + 2·X` are all the same answer. This crate decides whether
//! a student's free-text answer denotes the same mathematical value as the
//! canonical one, by normalizing both strings, parsing them into structured
//! expressions, and comparing those structurally — with a small set of
//! subject-specific rules layered on top.
//!
//! ```
//! use eqcheck::{equivalent, equivalent_in_context, Subject};
//!
//! assert!(equivalent("3 + 2x", "2x + 3"));
//! assert!(equivalent("x^2 - 2x", "x**2-2x"));
//! assert!(!equivalent("x", "x^2"));
//! assert!(equivalent_in_context("1/2", "0.5", Subject::Trigonometry));
//! ```
//!
//! Both entry points are total over all string inputs: empty input is
//! rejected before parsing, unparseable input degrades to a loose string
//! comparison, and nothing ever panics across this boundary. The caller only
//! ever sees a boolean.

mod compare;
mod fallback;
mod subject;
mod trig;

pub use compare::{expr_equivalent, EPSILON};
pub use eqcheck_parser::ast::{Expr, Term};
pub use eqcheck_parser::parser::{error::ParseError, parse, try_parse};
pub use eqcheck_parser::preprocess::normalize;
pub use subject::{Subject, UnknownSubject};

/// Decides whether two answer strings are mathematically equivalent.
///
/// Equivalent to [`equivalent_in_context`] with [`Subject::Algebra`], which
/// applies no rules beyond the structural comparison.
pub fn equivalent(correct: &str, user: &str) -> bool {
    equivalent_in_context(correct, user, Subject::Algebra)
}

/// Decides whether two answer strings are mathematically equivalent, with
/// subject-specific rules applied when the structural comparison rejects the
/// answer.
///
/// Only [`Subject::Trigonometry`] currently adds rules (the special-value
/// table). Calculus and geometry intentionally add nothing: no equivalence
/// tables for them exist in the product, and inventing them would widen the
/// accepted-answer set of existing exercises.
pub fn equivalent_in_context(correct: &str, user: &str, subject: Subject) -> bool {
    if correct.trim().is_empty() || user.trim().is_empty() {
        return false;
    }

    let correct = normalize(correct);
    let user = normalize(user);

    if structural(&correct, &user) {
        return true;
    }

    match subject {
        Subject::Trigonometry => trig::special_values_match(&correct, &user),
        Subject::Algebra | Subject::Calculus | Subject::Geometry => false,
    }
}

/// The normalized-string pipeline: fast-path string equality (this is what
/// the preprocessor's term sorting exists for), then structural comparison,
/// then the loose fallback when either side fails to parse.
fn structural(correct: &str, user: &str) -> bool {
    if correct == user {
        return !correct.is_empty();
    }

    match (try_parse(correct), try_parse(user)) {
        (Ok(a), Ok(b)) => expr_equivalent(&a, &b),
        _ => fallback::loose_eq(correct, user),
    }
}
