//! strmatch - String similarity and phonetic matching
//!
//! Pairwise string comparison functions that each return a normalized score
//! in [0, 1], a Soundex encoder with English and French tables, and a single
//! aggregation entry point running every metric on one pair.
//!
//! # Features
//! - Edit-distance metrics (Levenshtein, Hamming), Jaro and Jaro-Winkler
//! - Set and frequency metrics (Jaccard, cosine) and n-gram overlap (Dice, trigram)
//! - Soundex with language tables and custom digit maps
//! - Prefix autocomplete over a trie, with a thread-safe handle
//! - A seeded random engine with distributions and 1D noise
//!
//! # Example
//! ```
//! use strmatch::{compare_all, jaro_winkler, levenshtein, soundex, soundex_with};
//!
//! assert!((levenshtein("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
//! assert!(jaro_winkler("MARTHA", "MARHTA") > 0.96);
//! assert_eq!(soundex("Robert"), "R163");
//! assert_eq!(soundex_with(Some("François"), Some("fr"), None), "F652");
//!
//! let report = compare_all("testing", "test");
//! assert_eq!(report.jaccard, 0.5);
//! ```
//!
//! # Empty strings
//!
//! Two empty strings are identical under every metric except Dice, which
//! returns `NaN` because neither side has a bigram. One empty string against
//! a non-empty one scores 0 everywhere.

pub mod algorithms;
pub mod compare;
pub mod error;
pub mod indexing;
pub mod random;

pub use algorithms::{
    cosine_similarity, dice_coefficient, dice_coefficient_checked, extract_ngrams, hamming,
    hamming_distance, jaccard_similarity, jaro, jaro_winkler, jaro_winkler_params, levenshtein,
    levenshtein_distance, soundex, soundex_match, soundex_with, trigram_score, EditDistance,
    Language, Similarity, Soundex, SoundexConfig, SoundexMap,
};
pub use compare::{compare, compare_all, Metric, SimilarityReport};
pub use error::{Error, Result};
pub use indexing::{AutocompleteConfig, AutocompleteEngine, SharedAutocomplete};
pub use random::{NoiseType, RandomEngine};
