//! Pairwise string similarity algorithms
//!
//! Every metric is a standalone function returning a score in [0, 1], plus a
//! zero-sized calculator type implementing [`Similarity`] so metrics can be
//! passed around as trait objects.
//!
//! Strings are compared as sequences of Unicode scalar values (`char`), with
//! no case folding or normalization. Soundex is the exception: it lowercases
//! its input and, for French, strips accents.

pub mod cosine;
pub mod hamming;
pub mod jaccard;
pub mod jaro;
pub mod levenshtein;
pub mod ngram;
pub mod normalize;
pub mod phonetic;

pub use cosine::*;
pub use hamming::*;
pub use jaccard::*;
pub use jaro::*;
pub use levenshtein::*;
pub use ngram::*;
pub use phonetic::*;

/// Trait for all similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm, as used in [`crate::SimilarityReport`]
    fn name(&self) -> &'static str;
}

/// Trait for algorithms that count unit edits between two strings.
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Normalized similarity: `1 - distance / max(len(a), len(b))`.
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let max_len = a.chars().count().max(b.chars().count());
        normalized_similarity(self.distance(a, b), max_len)
    }

    fn name(&self) -> &'static str;
}

/// Blanket implementation: any EditDistance is also a Similarity
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}

/// Rescale an edit count to [0, 1]. Two empty strings are identical.
#[inline]
pub(crate) fn normalized_similarity(distance: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        1.0
    } else {
        1.0 - distance as f64 / max_len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_similarity() {
        assert_eq!(normalized_similarity(0, 0), 1.0);
        assert_eq!(normalized_similarity(3, 3), 0.0);
        assert_eq!(normalized_similarity(1, 4), 0.75);
    }

    #[test]
    fn test_trait_objects() {
        let metrics: Vec<Box<dyn Similarity>> = vec![
            Box::new(Levenshtein::new()),
            Box::new(Hamming::new()),
            Box::new(Jaccard::new()),
            Box::new(Cosine::new()),
            Box::new(Dice::new()),
            Box::new(Trigram::new()),
            Box::new(Jaro::new()),
            Box::new(JaroWinkler::new()),
        ];

        for metric in &metrics {
            assert_eq!(metric.similarity("hello", "hello"), 1.0, "{}", metric.name());
            assert_eq!(metric.distance("hello", "hello"), 0.0, "{}", metric.name());
        }
    }

    #[test]
    fn test_edit_distance_blanket_matches_free_functions() {
        let lev: &dyn Similarity = &Levenshtein::new();
        let ham: &dyn Similarity = &Hamming::new();
        assert_eq!(lev.similarity("kitten", "sitting"), levenshtein("kitten", "sitting"));
        assert_eq!(ham.similarity("karolin", "kathrin"), hamming("karolin", "kathrin"));
    }
}
