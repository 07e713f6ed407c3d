//! Structural equivalence between parsed expressions.

use eqcheck_parser::ast::{Expr, Term};
use std::collections::BTreeMap;

/// Tolerance for coefficient and scalar comparison.
pub const EPSILON: f64 = 1e-10;

/// Decides whether two parsed expressions denote the same mathematical
/// value.
///
/// Symmetric by construction. Not guaranteed transitive right at the
/// tolerance boundary, which is acceptable for grading short answers.
pub fn expr_equivalent(a: &Expr, b: &Expr) -> bool {
    match (a, b) {
        (Expr::Number(x), Expr::Number(y)) => close(*x, *y),

        (Expr::Polynomial(p), Expr::Polynomial(q)) => polynomials_equal(p, q),

        // a/b == c/d iff a*d == b*c; no cancellation is attempted, so
        // fractions that only agree after removing a common factor from one
        // side are (acceptably) rejected
        (
            Expr::Fraction { numerator: an, denominator: ad },
            Expr::Fraction { numerator: bn, denominator: bd },
        ) => polynomials_equal(&multiply(an, bd), &multiply(ad, bn)),

        // a number can equal a polynomial only when the polynomial is fully
        // constant; a free variable on one side is an automatic mismatch
        (Expr::Number(x), Expr::Polynomial(p)) | (Expr::Polynomial(p), Expr::Number(x)) => {
            constant_sum(p).is_some_and(|sum| close(*x, sum))
        },

        // no coercion exists between fractions and anything else, even when
        // the fraction is a constant ratio: `4/2` is not accepted for `2`
        (Expr::Fraction { .. }, _) | (_, Expr::Fraction { .. }) => false,
    }
}

fn close(x: f64, y: f64) -> bool {
    (x - y).abs() < EPSILON
}

/// Sums the coefficients of a fully constant polynomial, or `None` when any
/// term still carries a variable.
fn constant_sum(terms: &[Term]) -> Option<f64> {
    if terms.iter().all(Term::is_constant) {
        Some(terms.iter().map(|term| term.coefficient).sum())
    } else {
        None
    }
}

/// Groups terms by variable signature, summing coefficients per signature.
fn group(terms: &[Term]) -> BTreeMap<String, f64> {
    let mut groups = BTreeMap::new();
    for term in terms {
        *groups.entry(term.signature()).or_insert(0.0) += term.coefficient;
    }
    groups
}

/// Two polynomials are equal iff their grouped signature sets are identical
/// and every shared signature's summed coefficients agree within tolerance.
fn polynomials_equal(p: &[Term], q: &[Term]) -> bool {
    let (p, q) = (group(p), group(q));
    p.len() == q.len()
        && p.iter().all(|(signature, coefficient)| {
            q.get(signature)
                .is_some_and(|other| close(*coefficient, *other))
        })
}

/// The termwise product of two polynomials.
fn multiply(p: &[Term], q: &[Term]) -> Vec<Term> {
    let mut product = Vec::with_capacity(p.len() * q.len());
    for left in p {
        for right in q {
            product.push(left.mul(right));
        }
    }
    product
}
