//! Run every similarity metric on one pair of strings.
//!
//! [`compare_all`] calls each metric directly with the same arguments, so
//! every field of the [`SimilarityReport`] is bit-identical to the
//! corresponding standalone function. Soundex is not part of the report; it
//! produces a code, not a score.

use crate::algorithms::{
    cosine_similarity, dice_coefficient, hamming, jaccard_similarity, jaro, jaro_winkler,
    levenshtein, trigram_score,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight metrics reported by [`compare_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Levenshtein,
    JaroWinkler,
    Hamming,
    Trigram,
    Jaccard,
    Jaro,
    Dice,
    Cosine,
}

impl Metric {
    /// All metrics, in report order.
    pub const ALL: [Metric; 8] = [
        Metric::Levenshtein,
        Metric::JaroWinkler,
        Metric::Hamming,
        Metric::Trigram,
        Metric::Jaccard,
        Metric::Jaro,
        Metric::Dice,
        Metric::Cosine,
    ];

    /// Report field name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::JaroWinkler => "jaroWinkler",
            Metric::Hamming => "hamming",
            Metric::Trigram => "trigram",
            Metric::Jaccard => "jaccard",
            Metric::Jaro => "jaro",
            Metric::Dice => "dice",
            Metric::Cosine => "cosine",
        }
    }

    /// Score `a` against `b` with this metric.
    #[must_use]
    pub fn compute(self, a: &str, b: &str) -> f64 {
        match self {
            Metric::Levenshtein => levenshtein(a, b),
            Metric::JaroWinkler => jaro_winkler(a, b),
            Metric::Hamming => hamming(a, b),
            Metric::Trigram => trigram_score(a, b),
            Metric::Jaccard => jaccard_similarity(a, b),
            Metric::Jaro => jaro(a, b),
            Metric::Dice => dice_coefficient(a, b),
            Metric::Cosine => cosine_similarity(a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    /// Accepts report names (`jaroWinkler`), function names
    /// (`diceCoefficient`) and their snake_case forms.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "levenshtein" => Ok(Metric::Levenshtein),
            "jaroWinkler" | "jaro_winkler" => Ok(Metric::JaroWinkler),
            "hamming" => Ok(Metric::Hamming),
            "trigram" | "trigramScore" | "trigram_score" => Ok(Metric::Trigram),
            "jaccard" | "jaccardSimilarity" | "jaccard_similarity" => Ok(Metric::Jaccard),
            "jaro" => Ok(Metric::Jaro),
            "dice" | "diceCoefficient" | "dice_coefficient" => Ok(Metric::Dice),
            "cosine" | "cosineSimilarity" | "cosine_similarity" => Ok(Metric::Cosine),
            _ => Err(Error::UnknownMetric(s.to_string())),
        }
    }
}

/// Scores of every metric for one pair of strings.
///
/// `dice` is `NaN` when neither string has a bigram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityReport {
    pub levenshtein: f64,
    pub jaro_winkler: f64,
    pub hamming: f64,
    pub trigram: f64,
    pub jaccard: f64,
    pub jaro: f64,
    #[serde(with = "nan_as_null")]
    pub dice: f64,
    pub cosine: f64,
}

impl SimilarityReport {
    /// Score for one metric.
    #[must_use]
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Levenshtein => self.levenshtein,
            Metric::JaroWinkler => self.jaro_winkler,
            Metric::Hamming => self.hamming,
            Metric::Trigram => self.trigram,
            Metric::Jaccard => self.jaccard,
            Metric::Jaro => self.jaro,
            Metric::Dice => self.dice,
            Metric::Cosine => self.cosine,
        }
    }

    /// `(metric, score)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

/// JSON has no NaN: the Dice sentinel is written as `null` and read back.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// Score `a` against `b` with every metric.
///
/// # Example
/// ```
/// use strmatch::{compare_all, levenshtein};
///
/// let report = compare_all("testing", "test");
/// assert_eq!(report.levenshtein, levenshtein("testing", "test"));
/// ```
#[must_use]
pub fn compare_all(a: &str, b: &str) -> SimilarityReport {
    let report = SimilarityReport {
        levenshtein: levenshtein(a, b),
        jaro_winkler: jaro_winkler(a, b),
        hamming: hamming(a, b),
        trigram: trigram_score(a, b),
        jaccard: jaccard_similarity(a, b),
        jaro: jaro(a, b),
        dice: dice_coefficient(a, b),
        cosine: cosine_similarity(a, b),
    };
    tracing::trace!(?report, "compare_all");
    report
}

/// Score `a` against `b` with the metric called `metric`.
///
/// # Errors
/// [`Error::UnknownMetric`] if the name is not one of the eight metrics.
pub fn compare(metric: &str, a: &str, b: &str) -> Result<f64> {
    Ok(metric.parse::<Metric>()?.compute(a, b))
}
