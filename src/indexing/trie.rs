//! Prefix tree and the autocomplete engine built on it.
//!
//! Nodes live in a single arena and refer to their children by index.
//! Children keep insertion order, so suggestions come back in a stable
//! order: depth-first, a word before its extensions, siblings in the order
//! they were first inserted.

use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::algorithms::Language;
use crate::error::{Error, Result};

/// Default cap on the number of suggestions returned by [`AutocompleteEngine`].
pub const DEFAULT_MAX_SUGGESTIONS: usize = 20;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: SmallVec<[(char, usize); 4]>,
    is_word: bool,
}

impl TrieNode {
    fn child(&self, c: char) -> Option<usize> {
        self.children
            .iter()
            .find_map(|&(k, idx)| (k == c).then_some(idx))
    }
}

/// Char-keyed prefix tree.
///
/// The trie stores words exactly as given; case folding and deduplication
/// are the job of [`AutocompleteEngine`].
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// Insert a word. Returns `true` if it was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = 0;
        for c in word.chars() {
            node = match self.nodes[node].child(c) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.push((c, next));
                    next
                }
            };
        }

        let terminal = &mut self.nodes[node];
        if terminal.is_word {
            return false;
        }
        terminal.is_word = true;
        self.len += 1;
        true
    }

    /// Check whether `word` was inserted (prefixes of words do not count).
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|idx| self.nodes[idx].is_word)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find(&self, prefix: &str) -> Option<usize> {
        prefix
            .chars()
            .try_fold(0, |node, c| self.nodes[node].child(c))
    }

    /// Up to `max` words starting with `prefix`.
    ///
    /// An empty prefix walks the whole trie. Unknown prefixes and `max == 0`
    /// give an empty list.
    ///
    /// # Example
    /// ```
    /// use strmatch::indexing::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for word in ["java", "javascript", "javac", "python"] {
    ///     trie.insert(word);
    /// }
    /// assert_eq!(trie.autocomplete("jav", 10), vec!["java", "javascript", "javac"]);
    /// assert_eq!(trie.autocomplete("jav", 1), vec!["java"]);
    /// ```
    #[must_use]
    pub fn autocomplete(&self, prefix: &str, max: usize) -> Vec<String> {
        let mut results = Vec::new();
        if max == 0 {
            return results;
        }
        let Some(start) = self.find(prefix) else {
            return results;
        };

        // Pre-order walk with an explicit stack; children are pushed in
        // reverse so they pop in insertion order.
        let mut stack = vec![(start, prefix.to_string())];
        while let Some((idx, word)) = stack.pop() {
            let node = &self.nodes[idx];
            if node.is_word {
                results.push(word.clone());
                if results.len() >= max {
                    break;
                }
            }
            for &(c, child) in node.children.iter().rev() {
                let mut next = String::with_capacity(word.len() + c.len_utf8());
                next.push_str(&word);
                next.push(c);
                stack.push((child, next));
            }
        }
        results
    }
}

/// Where an engine's initial words come from.
///
/// Deserializes from either a JSON array of words or a path string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DictionarySource {
    Words(Vec<String>),
    Path(PathBuf),
}

/// Configuration for [`AutocompleteEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutocompleteConfig {
    /// Language tag carried by the engine. No dictionaries are bundled, so
    /// this does not load anything by itself.
    pub language: Language,
    pub max_suggestions: usize,
    pub dictionary: Option<DictionarySource>,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            language: Language::French,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            dictionary: None,
        }
    }
}

/// Case-insensitive word completion over a [`Trie`].
///
/// # Example
/// ```
/// use strmatch::indexing::AutocompleteEngine;
///
/// let mut engine = AutocompleteEngine::new();
/// engine.add_words(["Java", "JavaScript", "python", "java"]);
/// assert_eq!(engine.word_count(), 3);
/// assert_eq!(engine.autocomplete("JAV"), vec!["java", "javascript"]);
/// ```
#[derive(Debug, Clone)]
pub struct AutocompleteEngine {
    trie: Trie,
    seen: AHashSet<String>,
    language: Language,
    max_suggestions: usize,
}

impl Default for AutocompleteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AutocompleteEngine {
    /// Create an empty engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            seen: AHashSet::new(),
            language: Language::French,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Create an engine and load its configured dictionary.
    ///
    /// # Errors
    /// [`Error::Dictionary`] if the dictionary is a path that cannot be read.
    pub fn from_config(config: AutocompleteConfig) -> Result<Self> {
        let mut engine = Self {
            language: config.language,
            max_suggestions: config.max_suggestions,
            ..Self::new()
        };
        match config.dictionary {
            Some(DictionarySource::Words(words)) => {
                engine.add_words(words);
            }
            Some(DictionarySource::Path(path)) => {
                engine.load_dictionary(path)?;
            }
            None => {}
        }
        Ok(engine)
    }

    /// Current configuration, without the dictionary.
    #[must_use]
    pub fn config(&self) -> AutocompleteConfig {
        AutocompleteConfig {
            language: self.language,
            max_suggestions: self.max_suggestions,
            dictionary: None,
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    /// Add a word, trimmed and lowercased.
    ///
    /// Returns `false` for blank words and words already known.
    pub fn add_word(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() || self.seen.contains(&word) {
            return false;
        }
        self.trie.insert(&word);
        self.seen.insert(word);
        true
    }

    /// Add several words. Returns how many were new.
    pub fn add_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|w| self.add_word(w.as_ref()))
            .count()
    }

    /// Number of distinct words known to the engine.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.seen.len()
    }

    /// Completions of `prefix`, at most `max_suggestions` of them.
    ///
    /// The prefix is lowercased but not trimmed. An empty prefix gives no
    /// suggestions.
    #[must_use]
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return vec![];
        }
        self.trie
            .autocomplete(&prefix.to_lowercase(), self.max_suggestions)
    }

    /// Alias for [`autocomplete`](Self::autocomplete).
    #[must_use]
    pub fn search(&self, prefix: &str) -> Vec<String> {
        self.autocomplete(prefix)
    }

    /// Load words from a file. Returns the number of new words.
    ///
    /// A JSON array adds its string entries; any other valid JSON document
    /// adds nothing. Content that is not JSON is read as one word per line.
    ///
    /// # Errors
    /// [`Error::Dictionary`] if the file cannot be read.
    pub fn load_dictionary(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;

        let added = match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(serde_json::Value::Array(entries)) => {
                let mut added = 0;
                for entry in &entries {
                    match entry.as_str() {
                        Some(word) => added += usize::from(self.add_word(word)),
                        None => tracing::warn!(
                            path = %path.display(),
                            %entry,
                            "skipping non-string dictionary entry"
                        ),
                    }
                }
                added
            }
            Ok(other) => {
                tracing::warn!(
                    path = %path.display(),
                    kind = json_kind(&other),
                    "dictionary is JSON but not an array; nothing loaded"
                );
                0
            }
            Err(_) => self.add_words(content.lines()),
        };

        tracing::debug!(path = %path.display(), added, total = self.word_count(), "loaded dictionary");
        Ok(added)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
