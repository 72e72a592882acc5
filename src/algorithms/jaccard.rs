//! Jaccard similarity over character sets
//!
//! Each string is reduced to its set of distinct characters; the score is
//! `|A ∩ B| / |A ∪ B|`. Repeated characters carry no extra weight, which is
//! what separates this metric from [`super::cosine`].

use super::Similarity;
use ahash::AHashSet;

/// Character-set Jaccard calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaccard;

impl Jaccard {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Jaccard {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaccard_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

/// Jaccard similarity of the character sets of `a` and `b`.
///
/// Two empty strings score 1; exactly one empty string scores 0.
///
/// # Example
/// ```
/// use strmatch::jaccard_similarity;
///
/// // {h,e,l,o} vs {h,e,l,p}: 3 shared out of 5 distinct
/// assert_eq!(jaccard_similarity("hello", "help"), 0.6);
/// ```
#[must_use]
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let a_set: AHashSet<char> = a.chars().collect();
    let b_set: AHashSet<char> = b.chars().collect();

    let intersection = a_set.intersection(&b_set).count();
    let union = a_set.len() + b_set.len() - intersection;

    if union == 0 {
        1.0
    } else {
        intersection as f64 / union as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaccard_basic() {
        assert_eq!(jaccard_similarity("hello", "help"), 0.6);
        assert_eq!(jaccard_similarity("abc", "abc"), 1.0);
        assert_eq!(jaccard_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_jaccard_duplicates_collapse() {
        assert_eq!(jaccard_similarity("aaa", "a"), 1.0);
        assert_eq!(jaccard_similarity("aabb", "ab"), 1.0);
    }

    #[test]
    fn test_jaccard_empty() {
        assert_eq!(jaccard_similarity("", ""), 1.0);
        assert_eq!(jaccard_similarity("", "hello"), 0.0);
        assert_eq!(jaccard_similarity("hello", ""), 0.0);
    }

    #[test]
    fn test_jaccard_case_sensitive() {
        assert_eq!(jaccard_similarity("A", "a"), 0.0);
    }
}
