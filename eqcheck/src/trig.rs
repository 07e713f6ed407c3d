//! The trigonometry special-value table.
//!
//! The parser cannot relate a surd to its decimal or symbol spelling, so the
//! common unit-circle values get a fixed table of textual pairs instead.
//! This is a deliberately narrow heuristic for the handful of answers trig
//! exercises actually use, not general surd equivalence.

use eqcheck_parser::preprocess::normalize;
use once_cell::sync::Lazy;

/// Pairs of spellings that denote the same special value. Stored normalized,
/// since containment is checked against normalized input.
static EQUIVALENT_PAIRS: Lazy<Vec<(String, String)>> = Lazy::new(|| {
    [
        // sin(pi/6), cos(pi/3)
        ("1/2", "0.5"),
        // sin(pi/4), cos(pi/4)
        ("sqrt(2)/2", "√2/2"),
        // sin(pi/3), cos(pi/6)
        ("sqrt(3)/2", "√3/2"),
        // tan(pi/3)
        ("sqrt(3)", "√3"),
        // cos(2pi/3)
        ("-1/2", "-0.5"),
    ]
    .into_iter()
    .map(|(a, b)| (normalize(a), normalize(b)))
    .collect()
});

/// Checks the special-value table: true when one normalized input contains
/// one member of a pair and the other input contains the other member, in
/// either orientation. Substring containment, not equality.
pub(crate) fn special_values_match(a: &str, b: &str) -> bool {
    EQUIVALENT_PAIRS.iter().any(|(left, right)| {
        (a.contains(left.as_str()) && b.contains(right.as_str()))
            || (a.contains(right.as_str()) && b.contains(left.as_str()))
    })
}
