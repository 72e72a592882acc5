//! Soundex phonetic encoding
//!
//! Encodes a word by how it sounds: the first letter, uppercased, followed
//! by three digits. Words that sound alike ("Robert", "Rupert") share a
//! code.
//!
//! # Encoding rules
//!
//! - Input is lowercased. For French it is also folded: `ç` -> `s`,
//!   `œ` -> `e`, accents stripped.
//! - The first character is kept as the anchor letter and never encoded.
//! - Every following character is looked up in the digit table. Vowels,
//!   `h`, `w`, `y` and anything unmapped (digits, punctuation) have no code.
//! - A digit is appended only when it differs from the code of the previous
//!   character. A character without a code resets this, so the same digit
//!   on both sides of a vowel is written twice.
//! - Encoding stops at four characters; shorter codes are padded with `0`.
//! - Empty (or absent) input encodes to [`EMPTY_SOUNDEX`].
//!
//! # Tables
//!
//! | Code | English | French |
//! |------|---------|--------|
//! | 1 | b f p v | b p |
//! | 2 | c g j k q s x z | c g j k q s x z ç |
//! | 3 | d t | d t |
//! | 4 | l | l |
//! | 5 | m n | m n |
//! | 6 | r | r |
//! | 7 | | f v |
//!
//! A [`SoundexMap`] replaces the language table entirely.

use super::normalize::{fold_french, normalize_string, NormalizationMode};
use crate::error::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Code returned for empty or absent input.
pub const EMPTY_SOUNDEX: &str = "Z000";

/// Length of every Soundex code.
const CODE_LENGTH: usize = 4;

/// Language whose digit table and folding rules are used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    /// Resolve a language tag. Unknown tags fall back to English.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" => Language::English,
            "fr" => Language::French,
            other => {
                tracing::debug!(tag = other, "unknown soundex language, using English");
                Language::English
            }
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    fn code(self, c: char) -> Option<char> {
        match self {
            Language::English => english_code(c),
            Language::French => french_code(c),
        }
    }

    fn fold(self, s: &str) -> String {
        match self {
            Language::English => normalize_string(s, NormalizationMode::Lowercase),
            Language::French => fold_french(s),
        }
    }
}

fn english_code(c: char) -> Option<char> {
    match c {
        'b' | 'f' | 'p' | 'v' => Some('1'),
        'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => Some('2'),
        'd' | 't' => Some('3'),
        'l' => Some('4'),
        'm' | 'n' => Some('5'),
        'r' => Some('6'),
        _ => None,
    }
}

fn french_code(c: char) -> Option<char> {
    match c {
        'b' | 'p' => Some('1'),
        'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' | 'ç' => Some('2'),
        'd' | 't' => Some('3'),
        'l' => Some('4'),
        'm' | 'n' => Some('5'),
        'r' => Some('6'),
        'f' | 'v' => Some('7'),
        _ => None,
    }
}

/// Custom character-to-digit table.
///
/// Each entry maps a (lowercase) character to a single ASCII digit, or to
/// no code at all. Characters missing from the table have no code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<char, String>", into = "HashMap<char, String>")]
pub struct SoundexMap {
    codes: AHashMap<char, Option<char>>,
}

impl SoundexMap {
    /// Build a table from `(char, code)` pairs.
    ///
    /// Every code must be empty or a single ASCII digit.
    ///
    /// # Example
    /// ```
    /// use strmatch::SoundexMap;
    ///
    /// let map = SoundexMap::from_pairs([('b', "9"), ('a', ""), ('t', "7")]).unwrap();
    /// assert!(SoundexMap::from_pairs([('b', "12")]).is_err());
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: AsRef<str>,
    {
        let mut codes = AHashMap::new();
        for (c, code) in pairs {
            codes.insert(c, parse_code(c, code.as_ref())?);
        }
        Ok(Self { codes })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn code(&self, c: char) -> Option<char> {
        self.codes.get(&c).copied().flatten()
    }
}

fn parse_code(c: char, code: &str) -> Result<Option<char>> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(d), None) if d.is_ascii_digit() => Ok(Some(d)),
        _ => Err(Error::invalid(
            "custom_map",
            format!("code for '{}' must be empty or one ASCII digit, got {:?}", c, code),
        )),
    }
}

impl TryFrom<HashMap<char, String>> for SoundexMap {
    type Error = Error;

    fn try_from(map: HashMap<char, String>) -> Result<Self> {
        Self::from_pairs(map)
    }
}

impl From<SoundexMap> for HashMap<char, String> {
    fn from(map: SoundexMap) -> Self {
        map.codes
            .into_iter()
            .map(|(c, code)| (c, code.map(String::from).unwrap_or_default()))
            .collect()
    }
}

/// Configuration for the Soundex encoder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundexConfig {
    /// Digit table and folding rules
    pub language: Language,
    /// Overrides the language table when set
    pub custom_map: Option<SoundexMap>,
}

/// Soundex phonetic encoder
///
/// # Examples
/// ```
/// use strmatch::{Language, Soundex};
///
/// assert_eq!(Soundex::new().encode("Robert"), "R163");
/// assert_eq!(Soundex::new().with_language(Language::French).encode("Vincent"), "V525");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Soundex {
    language: Language,
    custom_map: Option<SoundexMap>,
}

impl Soundex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from configuration
    #[must_use]
    pub fn from_config(config: SoundexConfig) -> Self {
        Self {
            language: config.language,
            custom_map: config.custom_map,
        }
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> SoundexConfig {
        SoundexConfig {
            language: self.language,
            custom_map: self.custom_map.clone(),
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn with_custom_map(mut self, map: SoundexMap) -> Self {
        self.custom_map = Some(map);
        self
    }

    /// Encode a string to its Soundex code
    #[must_use]
    pub fn encode(&self, s: &str) -> String {
        let folded = self.language.fold(s);
        match &self.custom_map {
            Some(map) => encode_folded(&folded, |c| map.code(c)),
            None => encode_folded(&folded, |c| self.language.code(c)),
        }
    }

    /// Encode possibly absent input; `None` gives [`EMPTY_SOUNDEX`].
    #[must_use]
    pub fn encode_opt(&self, s: Option<&str>) -> String {
        s.map_or_else(|| EMPTY_SOUNDEX.to_string(), |s| self.encode(s))
    }
}

fn encode_folded(s: &str, lookup: impl Fn(char) -> Option<char>) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return EMPTY_SOUNDEX.to_string();
    };

    let mut result = String::with_capacity(CODE_LENGTH);
    result.push(first.to_uppercase().next().unwrap_or(first));
    let mut len = 1;
    let mut prev_code = lookup(first);

    for c in chars {
        if len == CODE_LENGTH {
            break;
        }

        let code = lookup(c);
        if let Some(digit) = code {
            if prev_code != Some(digit) {
                result.push(digit);
                len += 1;
            }
        }
        // Uncoded characters reset adjacency
        prev_code = code;
    }

    result.extend(std::iter::repeat('0').take(CODE_LENGTH - len));
    result
}

/// English Soundex code of `s`.
///
/// # Examples
/// ```
/// use strmatch::soundex;
/// assert_eq!(soundex("Robert"), "R163");
/// assert_eq!(soundex("Rupert"), "R163");
/// assert_eq!(soundex(""), "Z000");
/// ```
#[must_use]
pub fn soundex(s: &str) -> String {
    Soundex::new().encode(s)
}

/// Soundex with every option: absent input, a language tag and a custom
/// table (which wins over the language table).
///
/// Unknown language tags fall back to English.
///
/// # Examples
/// ```
/// use strmatch::soundex_with;
/// assert_eq!(soundex_with(None, None, None), "Z000");
/// assert_eq!(soundex_with(Some("Pierre"), Some("fr"), None), "P600");
/// ```
#[must_use]
pub fn soundex_with(s: Option<&str>, lang: Option<&str>, custom_map: Option<&SoundexMap>) -> String {
    let mut encoder = Soundex::new().with_language(lang.map_or(Language::English, Language::from_tag));
    if let Some(map) = custom_map {
        encoder = encoder.with_custom_map(map.clone());
    }
    encoder.encode_opt(s)
}

/// Check if two strings have the same English Soundex code.
#[must_use]
pub fn soundex_match(a: &str, b: &str) -> bool {
    soundex(a) == soundex(b)
}
