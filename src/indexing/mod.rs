//! Prefix indexing for word completion
//!
//! - Trie: char-keyed prefix tree with ordered children
//! - Autocomplete engine: case-folded, deduplicated completion over a trie
//! - Thread-safe wrapper: concurrent access behind a read/write lock

pub mod threadsafe;
pub mod trie;

pub use threadsafe::*;
pub use trie::*;
