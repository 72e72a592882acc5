//! Levenshtein (edit) distance implementation
//!
//! Insertions, deletions and substitutions each cost 1. The normalized score
//! is `1 - distance / max(len(a), len(b))`.
//!
//! # Complexity
//! - Time: O(m*n)
//! - Space: O(min(m,n)) using a single DP row

use super::{normalized_similarity, EditDistance};
use smallvec::SmallVec;

/// Levenshtein distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Single-row DP over char slices.
///
/// The shorter slice sits on the row axis so the buffer stays small.
#[inline]
fn dp_distance(a: &[char], b: &[char]) -> usize {
    let (row_axis, col_axis) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if row_axis.is_empty() {
        return col_axis.len();
    }

    let mut row: SmallVec<[usize; 64]> = (0..=row_axis.len()).collect();

    for (i, &c) in col_axis.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &r) in row_axis.iter().enumerate() {
            let substitution = diagonal + usize::from(c != r);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;

            diagonal = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[row_axis.len()]
}

/// Minimum number of single-character edits turning `a` into `b`.
///
/// # Example
/// ```
/// use strmatch::algorithms::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    dp_distance(&a_chars, &b_chars)
}

/// Normalized Levenshtein similarity (0.0 to 1.0).
///
/// Two empty strings score 1; exactly one empty string scores 0.
///
/// # Example
/// ```
/// use strmatch::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 1.0 - 3.0 / 7.0);
/// assert_eq!(levenshtein("", ""), 1.0);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> f64 {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let max_len = a_chars.len().max(b_chars.len());
    normalized_similarity(dp_distance(&a_chars, &b_chars), max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", "abd"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("日本語", "日本"), 1);
    }

    #[test]
    fn test_levenshtein_normalized() {
        assert_eq!(levenshtein("kitten", "sitting"), 1.0 - 3.0 / 7.0);
        assert_eq!(levenshtein("", ""), 1.0);
        assert_eq!(levenshtein("", "hello"), 0.0);
        assert_eq!(levenshtein("hello", ""), 0.0);
        assert_eq!(levenshtein("same", "same"), 1.0);
    }

    #[test]
    fn test_levenshtein_symmetric() {
        let pairs = [("kitten", "sitting"), ("saturday", "sunday"), ("a", "abcdef")];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn test_levenshtein_long_strings() {
        // Longer than the inline SmallVec capacity
        let a = "a".repeat(100);
        let b = format!("{}b", "a".repeat(99));
        assert_eq!(levenshtein_distance(&a, &b), 1);
        assert_eq!(levenshtein(&a, &b), 0.99);
    }

    #[test]
    fn test_levenshtein_struct() {
        let lev = Levenshtein::new();
        assert_eq!(EditDistance::distance(&lev, "kitten", "sitting"), 3);
        assert_eq!(EditDistance::name(&lev), "levenshtein");
    }
}
