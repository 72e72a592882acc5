//! Error types for strmatch.
//!
//! The similarity metrics themselves are total over string pairs and never
//! fail. Errors only arise where a value crosses a dynamic boundary: metric
//! and noise names, custom Soundex tables, random engine parameters and
//! dictionary files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in strmatch.
#[derive(Error, Debug)]
pub enum Error {
    /// A value has the right type but violates the function's contract
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Metric name outside the fixed set reported by `compare_all`
    #[error("unknown metric '{0}'. Valid metrics: levenshtein, jaroWinkler, hamming, trigram, jaccard, jaro, dice, cosine")]
    UnknownMetric(String),

    /// Noise type other than perlin, value, white or pink
    #[error("unknown noise type '{0}'. Valid types: perlin, value, white, pink")]
    UnknownNoise(String),

    /// Dictionary file could not be read
    #[error("failed to read dictionary {path}: {source}")]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
