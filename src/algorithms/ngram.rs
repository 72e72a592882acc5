//! N-gram overlap metrics: Dice coefficient (bigrams) and trigram score
//!
//! Both use unpadded sliding windows over the characters of each string and
//! score `2 * |shared| / (|grams(a)| + |grams(b)|)`.
//!
//! # Counting shared n-grams
//!
//! N-grams are kept as lists, not sets. Each n-gram of `a` is looked up in
//! the n-grams of `b`, and every hit consumes one occurrence in `b`. Repeats
//! therefore count as many times as both sides have them. When neither side
//! repeats an n-gram this is exactly "count the n-grams of `a` present in
//! `b`"; with repeats it keeps the score symmetric and never above 1.
//!
//! # Degenerate inputs
//!
//! The two metrics disagree on purpose when neither string is long enough
//! to produce an n-gram:
//! - [`dice_coefficient`] returns `NaN` (0/0); use
//!   [`dice_coefficient_checked`] to get `None` instead.
//! - [`trigram_score`] returns 1.

use super::Similarity;
use ahash::AHashMap;
use smallvec::SmallVec;

/// Dice coefficient calculator (bigrams)
///
/// Note that [`Similarity::similarity`] forwards `NaN` unchanged for pairs
/// without any bigram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dice;

impl Dice {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Dice {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        dice_coefficient(a, b)
    }

    fn name(&self) -> &'static str {
        "dice"
    }
}

/// Trigram score calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trigram;

impl Trigram {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Trigram {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        trigram_score(a, b)
    }

    fn name(&self) -> &'static str {
        "trigram"
    }
}

/// Extract the n-grams of a string, in order, without padding.
///
/// Strings shorter than `n` chars (and `n == 0`) yield no n-grams.
///
/// # Example
/// ```
/// use strmatch::algorithms::ngram::extract_ngrams;
///
/// assert_eq!(extract_ngrams("hello", 2), vec!["he", "el", "ll", "lo"]);
/// assert!(extract_ngrams("a", 2).is_empty());
/// ```
#[must_use]
pub fn extract_ngrams(s: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return vec![];
    }
    let chars: SmallVec<[char; 64]> = s.chars().collect();
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// N-gram counts: (number of grams in `a`, in `b`, shared between them).
fn ngram_overlap(a: &str, b: &str, n: usize) -> (usize, usize, usize) {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    // windows() yields nothing for slices shorter than n
    let mut b_counts: AHashMap<&[char], usize> = AHashMap::new();
    let mut b_total = 0;
    for gram in b_chars.windows(n) {
        *b_counts.entry(gram).or_insert(0) += 1;
        b_total += 1;
    }

    let mut a_total = 0;
    let mut shared = 0;
    for gram in a_chars.windows(n) {
        a_total += 1;
        if let Some(remaining) = b_counts.get_mut(gram) {
            if *remaining > 0 {
                *remaining -= 1;
                shared += 1;
            }
        }
    }

    (a_total, b_total, shared)
}

/// Sørensen-Dice coefficient over character bigrams.
///
/// Returns `NaN` when neither string has a bigram (both shorter than two
/// chars). Callers that need to branch on that case should prefer
/// [`dice_coefficient_checked`].
///
/// # Example
/// ```
/// use strmatch::dice_coefficient;
///
/// // he, el, ll, lo vs he, el, lp
/// assert!((dice_coefficient("hello", "help") - 4.0 / 7.0).abs() < 1e-9);
/// assert!(dice_coefficient("a", "b").is_nan());
/// ```
#[must_use]
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    dice_coefficient_checked(a, b).unwrap_or(f64::NAN)
}

/// Dice coefficient, with `None` in place of the `NaN` sentinel.
#[must_use]
pub fn dice_coefficient_checked(a: &str, b: &str) -> Option<f64> {
    let (a_total, b_total, shared) = ngram_overlap(a, b, 2);
    let total = a_total + b_total;
    if total == 0 {
        return None;
    }
    Some((2 * shared) as f64 / total as f64)
}

/// Dice-style overlap of character trigrams.
///
/// Two strings without trigrams (both shorter than three chars) score 1;
/// exactly one without trigrams scores 0.
#[must_use]
pub fn trigram_score(a: &str, b: &str) -> f64 {
    let (a_total, b_total, shared) = ngram_overlap(a, b, 3);

    if a_total == 0 && b_total == 0 {
        return 1.0;
    }
    if a_total == 0 || b_total == 0 {
        return 0.0;
    }

    (2 * shared) as f64 / (a_total + b_total) as f64
}
