//! String normalization utilities
//!
//! The similarity metrics compare raw chars; these helpers exist for the
//! phonetic encoder, which folds case and (for French) accents before
//! encoding.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalization mode for string preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationMode {
    /// Convert to lowercase only
    Lowercase,
    /// Lowercase, then decompose (NFD) and drop combining marks:
    /// "Élève" -> "eleve"
    Strict,
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::Lowercase => s.to_lowercase(),
        NormalizationMode::Strict => s
            .to_lowercase()
            .nfd()
            .filter(|&c| !is_combining_mark(c))
            .collect(),
    }
}

/// Fold a French word for phonetic encoding.
///
/// Rewrites `ç` as `s` and the `œ` ligature as `e` (either case), then
/// applies [`NormalizationMode::Strict`].
#[must_use]
pub fn fold_french(s: &str) -> String {
    let mapped: String = s
        .chars()
        .map(|c| match c {
            'ç' | 'Ç' => 's',
            'œ' | 'Œ' => 'e',
            other => other,
        })
        .collect();
    normalize_string(&mapped, NormalizationMode::Strict)
}
