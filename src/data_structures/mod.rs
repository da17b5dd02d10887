//! Data structures for the Huaolelo dictionary.
//!
//! This module contains the word trie and the keypad table it searches
//! with. Everything here is synchronous and single-owner; callers that share
//! a trie across threads lock around each call.

pub mod word_trie;

// Re-export common data structures
pub use word_trie::{
    DigitMatch, KeypadError, KeypadLayout, WordEntry, WordTrie, WordTrieError, WordTrieResult,
};
