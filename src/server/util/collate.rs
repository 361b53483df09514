//! Locale-style string ordering for display lists.
//!
//! Names are compared ignoring case first, so `admin < Music < utility`. Strings that only
//! differ in case put the lowercase form first (`zap < Zap`), and a final byte comparison
//! keeps the order total.

use std::cmp::Ordering;

/// Compares two strings the way a case-sensitive locale collation orders them.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    folded(a)
        .cmp(folded(b))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .map(|(x, y)| case_rank(x).cmp(&case_rank(y)))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

fn folded(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}

fn case_rank(c: char) -> u8 {
    u8::from(c.is_uppercase())
}
