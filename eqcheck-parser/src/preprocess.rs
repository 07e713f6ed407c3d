//! Normalization of raw answer strings.
//!
//! Students type the same answer in many surface forms: `3 + 2X`, `3+2x`,
//! `2x+3`, `2·x + 3`. Normalization folds those onto one canonical string so
//! that most commutative reorderings compare equal before any parsing
//! happens, and so the parser only ever sees one spelling of each operator.

/// Normalizes a raw answer string into the canonical form the parser expects.
///
/// Total, deterministic, and idempotent: `normalize(normalize(s))` equals
/// `normalize(s)` for every input. Anything it cannot interpret passes
/// through unchanged.
pub fn normalize(raw: &str) -> String {
    let flattened = flatten(raw);
    let spliced = insert_implicit_mul(&flattened);
    let collapsed = collapse_signs(&spliced);

    if is_simple(&collapsed) {
        sort_terms(&collapsed)
    } else {
        collapsed
    }
}

/// Lowercases, strips whitespace, and rewrites symbol variants (`×`, `·`,
/// `÷`, `^`, superscript exponents) into the canonical operator set.
///
/// Superscripts matter because exercise content renders `x²`, and students
/// paste the rendered text back into the answer box.
fn flatten(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for c in raw.chars() {
        if c.is_whitespace() {
            continue;
        }
        match c {
            '×' | '·' => out.push('*'),
            '÷' => out.push('/'),
            '^' => out.push_str("**"),
            '²' => out.push_str("**2"),
            '³' => out.push_str("**3"),
            _ => out.extend(c.to_lowercase()),
        }
    }

    out
}

/// Inserts the `*` for implicit multiplication: `2x`, `3(`, `)x`, `)2`, and
/// `x(` all gain one.
fn insert_implicit_mul(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if let Some(p) = prev {
            let implicit = (p.is_ascii_digit() && c.is_ascii_lowercase())
                || (p.is_ascii_digit() && c == '(')
                || (p == ')' && (c.is_ascii_lowercase() || c.is_ascii_digit()))
                || (p.is_ascii_lowercase() && c == '(');
            if implicit {
                out.push('*');
            }
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

/// Collapses runs of signs to a fixpoint: `--` becomes `+`, `+-` and `-+`
/// become `-`.
fn collapse_signs(input: &str) -> String {
    let mut current = input.to_string();

    loop {
        let next = current
            .replace("--", "+")
            .replace("+-", "-")
            .replace("-+", "-");
        if next == current {
            return next;
        }
        current = next;
    }
}

/// A string is "simple" when it has no grouping or division and every `*` is
/// either the `**` power marker followed by digits or a single `*` between a
/// digit and a letter (the ones [`insert_implicit_mul`] inserts). Only simple
/// strings get the term-sorting fast path; everything else is left for the
/// parser.
fn is_simple(input: &str) -> bool {
    if input.contains(['(', ')', '/']) {
        return false;
    }

    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '*' {
            i += 1;
            continue;
        }

        if chars.get(i + 1) == Some(&'*') {
            if !chars.get(i + 2).is_some_and(|c| c.is_ascii_digit()) {
                return false;
            }
            i += 2;
        } else {
            let digit_before = i > 0 && chars[i - 1].is_ascii_digit();
            let letter_after = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
            if !digit_before || !letter_after {
                return false;
            }
            i += 1;
        }
    }

    true
}

/// Sorts the additive terms of a simple expression: letter-bearing terms
/// first, then pure numbers, alphabetically by literal text within each
/// group. `3+2*x` and `2*x+3` both come out as `2*x+3`, so commutative
/// reorderings collapse to identical strings before structural parsing is
/// ever attempted.
fn sort_terms(input: &str) -> String {
    let mut terms: Vec<(char, String)> = Vec::new();
    let mut sign = '+';
    let mut current = String::new();

    for c in input.chars() {
        if c == '+' || c == '-' {
            if !current.is_empty() {
                terms.push((sign, std::mem::take(&mut current)));
            }
            sign = c;
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        terms.push((sign, current));
    }

    terms.sort_by(|(_, a), (_, b)| {
        let a_letters = a.chars().any(|c| c.is_ascii_lowercase());
        let b_letters = b.chars().any(|c| c.is_ascii_lowercase());
        b_letters.cmp(&a_letters).then_with(|| a.cmp(b))
    });

    let mut out = String::with_capacity(input.len());
    for (i, (sign, text)) in terms.iter().enumerate() {
        if *sign == '-' {
            out.push('-');
        } else if i > 0 {
            out.push('+');
        }
        out.push_str(text);
    }

    out
}
