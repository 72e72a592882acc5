//! Hamming distance implementation
//!
//! Counts positions where characters differ.
//!
//! # Length Mismatch Behavior
//!
//! Classical Hamming distance is undefined for strings of different lengths.
//! This module is length-tolerant: positions are compared up to the longer
//! length, and every position past the end of the shorter string counts as a
//! mismatch. The normalized score is `1 - distance / max(len(a), len(b))`.
//!
//! # Complexity
//! - Time: O(n) where n is the longer string length
//! - Space: O(1)

use super::{normalized_similarity, EditDistance};

/// Hamming distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for Hamming {
    fn distance(&self, a: &str, b: &str) -> usize {
        hamming_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Mismatch count plus the longer length, in one pass.
fn mismatches(a: &str, b: &str) -> (usize, usize) {
    let mut a_iter = a.chars();
    let mut b_iter = b.chars();
    let mut distance = 0;
    let mut len = 0;

    loop {
        match (a_iter.next(), b_iter.next()) {
            (None, None) => break,
            (ac, bc) => {
                // A missing char never equals a present one
                if ac != bc {
                    distance += 1;
                }
                len += 1;
            }
        }
    }

    (distance, len)
}

/// Hamming distance over the longer length.
///
/// # Example
/// ```
/// use strmatch::algorithms::hamming::hamming_distance;
///
/// assert_eq!(hamming_distance("karolin", "kathrin"), 3);
/// assert_eq!(hamming_distance("abc", "ab"), 1);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> usize {
    mismatches(a, b).0
}

/// Normalized Hamming similarity (0.0 to 1.0).
///
/// Two empty strings score 1.
#[must_use]
pub fn hamming(a: &str, b: &str) -> f64 {
    let (distance, len) = mismatches(a, b);
    normalized_similarity(distance, len)
}
