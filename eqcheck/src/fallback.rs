//! Loose string comparison for answers the parser cannot handle.
//!
//! When either side of a comparison fails to parse, grading still should not
//! reject an answer that differs from the canonical one only cosmetically.
//! This module compares the normalized strings after stripping the cosmetic
//! differences the pipeline knows about. It is the last resort, and a known
//! source of false negatives for genuinely unparseable input.

/// Compares two normalized strings after stripping a trailing `.0` and
/// implicit `1*` coefficients.
pub(crate) fn loose_eq(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    strip_cosmetics(a) == strip_cosmetics(b)
}

/// Removes a trailing `.0` and any `1*` coefficient at the start of a term
/// (after the start of the string, a sign, an open paren, or a fraction bar).
fn strip_cosmetics(input: &str) -> String {
    let trimmed = input.strip_suffix(".0").unwrap_or(input);
    let chars: Vec<char> = trimmed.chars().collect();

    let mut out = String::with_capacity(trimmed.len());
    let mut prev: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let term_start = matches!(prev, None | Some('+' | '-' | '(' | '/'));
        if term_start && chars[i] == '1' && chars.get(i + 1) == Some(&'*') {
            i += 2;
            continue;
        }
        prev = Some(chars[i]);
        out.push(chars[i]);
        i += 1;
    }

    out
}
