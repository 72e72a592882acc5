//! Thread-safe handle to an [`AutocompleteEngine`].
//!
//! Lookups take a shared read lock, additions an exclusive write lock, so
//! many threads can complete prefixes while another one loads words.
//!
//! ```
//! use strmatch::indexing::SharedAutocomplete;
//!
//! let engine = SharedAutocomplete::new();
//! let writer = engine.clone();
//! std::thread::spawn(move || {
//!     writer.add_word("hello");
//! })
//! .join()
//! .unwrap();
//! assert_eq!(engine.autocomplete("he"), vec!["hello"]);
//! ```

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use super::trie::{AutocompleteConfig, AutocompleteEngine};
use crate::error::Result;

/// Clonable, lock-protected [`AutocompleteEngine`].
#[derive(Clone, Default)]
pub struct SharedAutocomplete {
    inner: Arc<RwLock<AutocompleteEngine>>,
}

impl SharedAutocomplete {
    /// Create a handle to an empty engine with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_engine(AutocompleteEngine::new())
    }

    /// Wrap an existing engine.
    #[must_use]
    pub fn from_engine(engine: AutocompleteEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Build the engine from a configuration.
    ///
    /// # Errors
    /// See [`AutocompleteEngine::from_config`].
    pub fn from_config(config: AutocompleteConfig) -> Result<Self> {
        AutocompleteEngine::from_config(config).map(Self::from_engine)
    }

    /// Add a word. Acquires the write lock.
    pub fn add_word(&self, word: &str) -> bool {
        self.inner.write().add_word(word)
    }

    /// Add several words under a single write lock.
    pub fn add_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().add_words(words)
    }

    /// Load a dictionary file. The file is read while holding the write lock.
    ///
    /// # Errors
    /// See [`AutocompleteEngine::load_dictionary`].
    pub fn load_dictionary(&self, path: impl AsRef<Path>) -> Result<usize> {
        self.inner.write().load_dictionary(path)
    }

    /// Completions of `prefix`. Acquires a read lock.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        self.inner.read().autocomplete(prefix)
    }

    pub fn search(&self, prefix: &str) -> Vec<String> {
        self.autocomplete(prefix)
    }

    pub fn word_count(&self) -> usize {
        self.inner.read().word_count()
    }

    /// Read guard for several lookups under one lock.
    pub fn read(&self) -> parking_lot::RwLockReadGuard<'_, AutocompleteEngine> {
        self.inner.read()
    }

    /// Write guard for batched updates.
    pub fn write(&self) -> parking_lot::RwLockWriteGuard<'_, AutocompleteEngine> {
        self.inner.write()
    }
}

impl std::fmt::Debug for SharedAutocomplete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedAutocomplete")
            .field("word_count", &self.word_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_concurrent_reads() {
        let engine = SharedAutocomplete::new();
        engine.add_words(["hello", "help", "helmet", "world"]);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                thread::spawn(move || {
                    assert_eq!(engine.autocomplete("hel").len(), 3);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_shared_concurrent_writes() {
        let engine = SharedAutocomplete::new();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = engine.clone();
                thread::spawn(move || {
                    for j in 0..100 {
                        engine.add_word(&format!("item_{}_{}", i, j));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(engine.word_count(), 400);
    }

    #[test]
    fn test_shared_mixed_read_write() {
        let engine = SharedAutocomplete::new();
        engine.add_word("initial");

        let writer_handle = engine.clone();
        let writer = thread::spawn(move || {
            for i in 0..50 {
                writer_handle.add_word(&format!("write_{}", i));
            }
        });

        let reader_handle = engine.clone();
        let reader = thread::spawn(move || {
            for _ in 0..50 {
                assert_eq!(reader_handle.autocomplete("init"), vec!["initial"]);
            }
        });

        writer.join().unwrap();
        reader.join().unwrap();
        assert_eq!(engine.word_count(), 51);
        assert_eq!(engine.search("write_4").len(), 11);
    }

    #[test]
    fn test_shared_from_config() {
        let config = AutocompleteConfig {
            max_suggestions: 2,
            ..Default::default()
        };
        let engine = SharedAutocomplete::from_config(config).unwrap();
        engine.write().add_words(["aa", "ab", "ac"]);
        assert_eq!(engine.read().max_suggestions(), 2);
        assert_eq!(engine.autocomplete("a"), vec!["aa", "ab"]);
    }
}
