//! Cosine similarity implementation
//!
//! Treats each string as a character-frequency vector and computes the
//! cosine of the angle between them. Unlike Jaccard, repeated characters
//! count: "aab" and "ab" are close but not identical.
//!
//! Scores are rounded to 15 decimal places to suppress floating-point noise,
//! so identical inputs score exactly 1.
//!
//! # Complexity
//! - Time: O(m+n) for building frequency maps and computing similarity
//! - Space: O(unique_chars) for frequency maps

use super::Similarity;
use ahash::AHashMap;

/// Scale used when rounding the final score.
const ROUNDING_SCALE: f64 = 1e15;

/// Character-frequency cosine calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cosine;

impl Cosine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Cosine {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        cosine_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}

/// Builds a frequency map from an iterator of items.
fn build_frequency_map<T, I>(iter: I) -> AHashMap<T, usize>
where
    T: std::hash::Hash + Eq,
    I: Iterator<Item = T>,
{
    let mut map = AHashMap::new();
    for item in iter {
        *map.entry(item).or_insert(0) += 1;
    }
    map
}

/// Cosine between two non-empty frequency maps, before rounding.
fn cosine_from_maps<T: std::hash::Hash + Eq>(
    map_a: &AHashMap<T, usize>,
    map_b: &AHashMap<T, usize>,
) -> f64 {
    let mut dot_product = 0.0f64;
    let mut magnitude_a = 0.0f64;
    let mut magnitude_b = 0.0f64;

    // Keys absent from the other map contribute 0 to the dot product
    for (key, &count_a) in map_a {
        let count_a = count_a as f64;
        magnitude_a += count_a * count_a;

        if let Some(&count_b) = map_b.get(key) {
            dot_product += count_a * count_b as f64;
        }
    }

    for &count_b in map_b.values() {
        let count_b = count_b as f64;
        magnitude_b += count_b * count_b;
    }

    dot_product / (magnitude_a.sqrt() * magnitude_b.sqrt())
}

#[inline]
fn round_score(score: f64) -> f64 {
    (score * ROUNDING_SCALE).round() / ROUNDING_SCALE
}

/// Character-frequency cosine similarity, case-sensitive.
///
/// Two empty strings score 1; exactly one empty string scores 0.
///
/// # Example
/// ```
/// use strmatch::cosine_similarity;
///
/// assert_eq!(cosine_similarity("abc", "abc"), 1.0);
/// assert_eq!(cosine_similarity("abc", "abd"), 0.666666666666667);
/// ```
#[must_use]
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let map_a = build_frequency_map(a.chars());
    let map_b = build_frequency_map(b.chars());

    round_score(cosine_from_maps(&map_a, &map_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_cosine_chars() {
        assert_eq!(cosine_similarity("abc", "abc"), 1.0);
        assert_eq!(cosine_similarity("abc", "def"), 0.0);
        assert_eq!(cosine_similarity("abc", "abd"), 0.666666666666667);
    }

    #[test]
    fn test_cosine_uses_frequencies() {
        // (2,1) . (1,1) / (sqrt(5) * sqrt(2))
        let expected = 3.0 / (5.0f64.sqrt() * 2.0f64.sqrt());
        assert!(approx_eq(cosine_similarity("aab", "ab"), expected));
        assert!(cosine_similarity("aab", "ab") < 1.0);
    }

    #[test]
    fn test_cosine_identical_is_exactly_one() {
        for s in ["MARTHA", "hello world", "aaaaabbbbbccccc", "ÉÀÇ"] {
            assert_eq!(cosine_similarity(s, s), 1.0);
        }
    }

    #[test]
    fn test_cosine_empty() {
        assert_eq!(cosine_similarity("", ""), 1.0);
        assert_eq!(cosine_similarity("", "abc"), 0.0);
        assert_eq!(cosine_similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_cosine_case_sensitive() {
        assert_eq!(cosine_similarity("ABC", "abc"), 0.0);
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(0.9999999999999998), 1.0);
        assert_eq!(round_score(0.5), 0.5);
    }
}
