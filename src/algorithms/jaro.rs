//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.
//!
//! # Matching rule
//!
//! Two characters match when they are equal and no further apart than
//! `max(0, max(len_a, len_b) / 2 - 1)` positions. Matching is greedy: each
//! character of the first string takes the leftmost unmatched equal
//! character of the second string inside its window. Transpositions are the
//! positions where the two matched subsequences disagree, halved.
//!
//! Greedy matching depends on scan direction in principle, so the pair is
//! always put in a canonical order first; `jaro(a, b)` and `jaro(b, a)` run
//! the exact same computation.
//!
//! # Performance Optimization
//!
//! ASCII inputs are compared as bytes, everything else as `char`s. Both
//! paths share one generic implementation.

use super::Similarity;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Default Winkler prefix scaling factor.
pub const DEFAULT_PREFIX_WEIGHT: f64 = 0.1;

/// Default cap on the shared prefix length.
pub const DEFAULT_MAX_PREFIX_LENGTH: usize = 4;

/// Prefix weights above this can push scores over 1.0.
const MAX_PREFIX_WEIGHT: f64 = 0.25;

// ============================================================================
// Public API
// ============================================================================

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*n) for matching characters
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Jaro {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Configuration for Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinklerConfig {
    /// Prefix weight (typically 0.1, max 0.25)
    pub prefix_weight: f64,
    /// Maximum prefix length to consider (typically 4)
    pub max_prefix_length: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            max_prefix_length: DEFAULT_MAX_PREFIX_LENGTH,
        }
    }
}

/// Jaro-Winkler similarity calculator
///
/// Extends Jaro similarity by giving extra weight to common prefixes.
/// The default instance computes exactly [`jaro_winkler`].
#[derive(Debug, Clone, PartialEq)]
pub struct JaroWinkler {
    /// Prefix weight (typically 0.1)
    pub prefix_weight: f64,
    /// Maximum prefix length to consider (typically 4)
    pub max_prefix_length: usize,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self::from_config(JaroWinklerConfig::default())
    }
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from configuration. The weight is clamped to [0.0, 0.25].
    #[must_use]
    pub fn from_config(config: JaroWinklerConfig) -> Self {
        Self {
            prefix_weight: config.prefix_weight.clamp(0.0, MAX_PREFIX_WEIGHT),
            max_prefix_length: config.max_prefix_length,
        }
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> JaroWinklerConfig {
        JaroWinklerConfig {
            prefix_weight: self.prefix_weight,
            max_prefix_length: self.max_prefix_length,
        }
    }

    #[must_use]
    pub fn with_prefix_weight(mut self, weight: f64) -> Self {
        if !(0.0..=MAX_PREFIX_WEIGHT).contains(&weight) {
            tracing::debug!(weight, "prefix_weight clamped to [0.0, 0.25]");
        }
        self.prefix_weight = weight.clamp(0.0, MAX_PREFIX_WEIGHT);
        self
    }

    #[must_use]
    pub fn with_max_prefix_length(mut self, length: usize) -> Self {
        self.max_prefix_length = length;
        self
    }
}

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler_params(a, b, self.prefix_weight, self.max_prefix_length)
    }

    fn name(&self) -> &'static str {
        "jaroWinkler"
    }
}

/// Calculate Jaro similarity between two strings.
///
/// Equal strings (including two empty strings) score 1; otherwise an empty
/// side scores 0.
///
/// # Example
/// ```
/// use strmatch::jaro;
///
/// assert!((jaro("MARTHA", "MARHTA") - 0.944).abs() < 0.001);
/// assert_eq!(jaro("", ""), 1.0);
/// assert_eq!(jaro("abc", ""), 0.0);
/// ```
#[inline]
#[must_use]
pub fn jaro(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    jaro_nonempty(a, b)
}

/// Picks the byte or char path. Both strings must be non-empty.
fn jaro_nonempty(a: &str, b: &str) -> f64 {
    if a.is_ascii() && b.is_ascii() {
        return jaro_core(a.as_bytes(), b.as_bytes());
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    jaro_core(&a_chars, &b_chars)
}

/// Jaro over two non-empty slices.
fn jaro_core<T: Ord>(a: &[T], b: &[T]) -> f64 {
    let (a, b) = if (a.len(), a) <= (b.len(), b) { (a, b) } else { (b, a) };
    let a_len = a.len();
    let b_len = b.len();

    let match_distance = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];

    let mut matches = 0usize;

    for i in 0..a_len {
        let start = i.saturating_sub(match_distance);
        let end = (i + match_distance + 1).min(b_len);

        for j in start..end {
            if b_matched[j] || a[i] != b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both matched subsequences in order
    let a_seq = a.iter().zip(&a_matched).filter(|&(_, &m)| m).map(|(c, _)| c);
    let b_seq = b.iter().zip(&b_matched).filter(|&(_, &m)| m).map(|(c, _)| c);
    let half_transpositions = a_seq.zip(b_seq).filter(|(x, y)| x != y).count() as f64 / 2.0;

    let m = matches as f64;
    (m / a_len as f64 + m / b_len as f64 + (m - half_transpositions) / m) / 3.0
}

/// Length of the shared leading run of chars, capped at `max_len`.
#[inline]
fn common_prefix_len(a: &str, b: &str, max_len: usize) -> usize {
    a.chars()
        .zip(b.chars())
        .take(max_len)
        .take_while(|(ac, bc)| ac == bc)
        .count()
}

/// Calculate Jaro-Winkler similarity with custom parameters.
///
/// `prefix_weight` is clamped to [0.0, 0.25], and the prefix boost
/// `prefix_len * prefix_weight` is capped at 1, so any `max_prefix_len`
/// keeps the result in [0.0, 1.0].
#[inline]
#[must_use]
pub fn jaro_winkler_params(a: &str, b: &str, prefix_weight: f64, max_prefix_len: usize) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let jaro_sim = jaro_nonempty(a, b);
    let prefix_weight = prefix_weight.clamp(0.0, MAX_PREFIX_WEIGHT);
    let prefix_len = common_prefix_len(a, b, max_prefix_len);
    let boost = (prefix_len as f64 * prefix_weight).min(1.0);

    jaro_sim + boost * (1.0 - jaro_sim)
}

/// Jaro-Winkler similarity with the standard weight 0.1 and a prefix cap of 4.
///
/// # Example
/// ```
/// use strmatch::{jaro, jaro_winkler};
///
/// assert!(jaro_winkler("MARTHA", "MARHTA") > jaro("MARTHA", "MARHTA"));
/// ```
#[inline]
#[must_use]
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    jaro_winkler_params(a, b, DEFAULT_PREFIX_WEIGHT, DEFAULT_MAX_PREFIX_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_jaro_basic() {
        assert_eq!(jaro("", ""), 1.0);
        assert_eq!(jaro("abc", "abc"), 1.0);
        assert_eq!(jaro("abc", "xyz"), 0.0);
        assert_eq!(jaro("", "hello"), 0.0);
        assert_eq!(jaro("hello", ""), 0.0);
    }

    #[test]
    fn test_jaro_examples() {
        assert!(approx_eq(jaro("MARTHA", "MARHTA"), 0.944));
        assert!(approx_eq(jaro("DWAYNE", "DUANE"), 0.822));
        assert!(approx_eq(jaro("DIXON", "DICKSONX"), 0.767));
        assert!(approx_eq(jaro("hello", "hallo"), 0.866));
    }

    #[test]
    fn test_jaro_fractional_transpositions() {
        // One transposed pair counts as half a transposition on each side
        let expected = (6.0 / 6.0 + 6.0 / 6.0 + (6.0 - 1.0) / 6.0) / 3.0;
        assert_eq!(jaro("MARTHA", "MARHTA"), expected);
    }

    #[test]
    fn test_jaro_symmetric() {
        let pairs = [
            ("MARTHA", "MARHTA"),
            ("DWAYNE", "DUANE"),
            ("DIXON", "DICKSONX"),
            ("abcab", "bacba"),
            ("aab", "baa"),
            ("crate", "trace"),
            ("héllo", "hlléo"),
        ];
        for (a, b) in pairs {
            assert_eq!(jaro(a, b), jaro(b, a), "{} / {}", a, b);
            assert_eq!(jaro_winkler(a, b), jaro_winkler(b, a), "{} / {}", a, b);
        }
    }

    #[test]
    fn test_jaro_ascii_and_unicode_paths_agree() {
        let ascii = jaro("MARTHA", "MARHTA");
        let a_chars: Vec<char> = "MARTHA".chars().collect();
        let b_chars: Vec<char> = "MARHTA".chars().collect();
        assert_eq!(ascii, jaro_core(&a_chars, &b_chars));

        let unicode_score = jaro("cafe", "caf\u{00e9}");
        assert!(unicode_score > 0.8);
    }

    #[test]
    fn test_jaro_winkler_boost() {
        let j = jaro("MARTHA", "MARHTA");
        let jw = jaro_winkler("MARTHA", "MARHTA");
        assert!(jw > j);
        assert!(approx_eq(jw, 0.961));
        assert!(approx_eq(jaro_winkler("DWAYNE", "DUANE"), 0.84));
        assert!(approx_eq(jaro_winkler("DIXON", "DICKSONX"), 0.813));
    }

    #[test]
    fn test_jaro_winkler_no_prefix_equals_jaro() {
        assert_eq!(jaro_winkler("hello", "world"), jaro("hello", "world"));
    }

    #[test]
    fn test_jaro_winkler_prefix_capped_at_four() {
        let j = jaro("abcdefgh", "abcdefxy");
        let expected = j + 4.0 * 0.1 * (1.0 - j);
        assert_eq!(jaro_winkler("abcdefgh", "abcdefxy"), expected);
    }

    #[test]
    fn test_jaro_winkler_empty() {
        assert_eq!(jaro_winkler("", ""), 1.0);
        assert_eq!(jaro_winkler("", "abc"), 0.0);
        assert_eq!(jaro_winkler("abc", ""), 0.0);
    }

    #[test]
    fn test_jaro_winkler_config() {
        let jw = JaroWinkler::new();
        assert_eq!(jw.config(), JaroWinklerConfig::default());
        assert_eq!(jw.similarity("MARTHA", "MARHTA"), jaro_winkler("MARTHA", "MARHTA"));

        let clamped = JaroWinkler::new().with_prefix_weight(0.9);
        assert_eq!(clamped.prefix_weight, 0.25);

        let no_boost = JaroWinkler::new().with_max_prefix_length(0);
        assert_eq!(no_boost.similarity("MARTHA", "MARHTA"), jaro("MARTHA", "MARHTA"));
    }

    #[test]
    fn test_jaro_winkler_long_prefix_stays_in_range() {
        let jw = JaroWinkler::new()
            .with_prefix_weight(0.25)
            .with_max_prefix_length(10);
        let score = jw.similarity("abcdefghijX", "abcdefghijY");
        assert!(score <= 1.0, "{}", score);
        // 10 * 0.25 saturates the boost: the full gap to 1 is closed
        assert_eq!(score, 1.0);

        let within = jaro_winkler_params("abcdefghijX", "abcdefghijY", 0.05, 10);
        let j = jaro("abcdefghijX", "abcdefghijY");
        assert_eq!(within, j + 10.0 * 0.05 * (1.0 - j));
        assert!(within < 1.0);
    }

    #[test]
    fn test_jaro_winkler_equal_strings() {
        for s in ["a", "MARTHA", "héllo"] {
            assert_eq!(jaro_winkler(s, s), 1.0);
            assert_eq!(jaro_winkler_params(s, s, 0.25, 100), 1.0);
        }
    }
}
