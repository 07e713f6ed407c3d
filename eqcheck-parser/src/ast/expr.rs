use super::term::Term;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed answer expression.
///
/// The comparator dispatches on this enum exhaustively, so every coercion
/// rule (and every deliberate gap, such as fraction-versus-number) is visible
/// in one `match`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A bare scalar value.
    Number(f64),

    /// A sum of terms, in source order. Like terms are *not* combined here;
    /// the comparator groups them by signature when it needs to.
    Polynomial(Vec<Term>),

    /// A ratio of two polynomials. Never simplified; equivalence between
    /// fractions is established by cross-multiplication alone.
    Fraction {
        numerator: Vec<Term>,
        denominator: Vec<Term>,
    },
}
