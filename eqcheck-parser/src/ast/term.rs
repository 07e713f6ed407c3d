use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monomial: a coefficient times a product of variable powers.
///
/// `3x^2y` is `Term { coefficient: 3.0, variables: {x: 2, y: 1} }`. A bare
/// number is a term with no variables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// The numeric coefficient. Always finite; the parser rejects anything
    /// that overflows to infinity or produces NaN.
    pub coefficient: f64,

    /// Exponent per variable, keyed by the single-letter variable name.
    /// Entries with exponent zero are never stored, so an empty map means the
    /// term is constant. A `BTreeMap` keeps the variables sorted, which makes
    /// [`signature`](Term::signature) canonical for free.
    pub variables: BTreeMap<char, u32>,
}

impl Term {
    /// Creates a constant term with the given value.
    pub fn constant(coefficient: f64) -> Self {
        Self {
            coefficient,
            variables: BTreeMap::new(),
        }
    }

    /// Returns true if the term carries no variables.
    pub fn is_constant(&self) -> bool {
        self.variables.is_empty()
    }

    /// The canonical string key identifying which variables (and exponents)
    /// this term contains, used to merge like terms: `x`, `x^2`, `x^2y`, or
    /// the literal `constant` for a term with no variables.
    pub fn signature(&self) -> String {
        if self.variables.is_empty() {
            return "constant".to_string();
        }

        self.variables
            .iter()
            .map(|(var, exp)| {
                if *exp == 1 {
                    var.to_string()
                } else {
                    format!("{var}^{exp}")
                }
            })
            .collect()
    }

    /// The product of two terms: coefficients multiply, exponents of shared
    /// variables add.
    pub fn mul(&self, other: &Term) -> Term {
        let mut variables = self.variables.clone();
        for (&var, &exp) in &other.variables {
            let entry = variables.entry(var).or_insert(0);
            // saturate rather than overflow on absurd exponents
            *entry = entry.saturating_add(exp);
        }

        Term {
            coefficient: self.coefficient * other.coefficient,
            variables,
        }
    }
}
