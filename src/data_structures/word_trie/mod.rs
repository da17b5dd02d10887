//! Word Trie Implementation
//!
//! This module provides the prefix tree behind the predictive-text
//! dictionary. Every path from the root spells a prefix; terminal nodes mark
//! stored words and carry their usage frequency. Each node also keeps the
//! aggregate frequency of its whole subtree, updated incrementally on every
//! mutation, so prefix popularity is a single path walk.
//!
//! Queries supported on top of the tree:
//! * exact and prefix frequency lookup
//! * full and prefix-scoped enumeration in code point order
//! * glob-style pattern matching with `?` and `*`
//! * keypad digit search, reported per consumed digit
//! * fuzzy keypad search tolerating one digit of error
//!
//! The trie is a plain single-owner value. Callers that share it across
//! threads wrap the whole trie in one lock per call.

mod digits;
mod error;
pub mod keypad;
mod node;
mod search;

use std::collections::BTreeMap;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};
use tracing::{debug, warn};

pub use digits::{keypad_distance, DigitMatch, FUZZY_TOLERANCE};
pub use error::{KeypadError, WordTrieError};
pub use keypad::KeypadLayout;
pub use search::{WordEntry, MULTI_WILDCARD, SINGLE_WILDCARD};
use node::TrieNode;

/// Result type for word trie queries
pub type WordTrieResult<T> = Result<T, WordTrieError>;

/// Prefix tree of words with usage frequencies.
///
/// Key features:
/// * Aggregated per-prefix frequency kept consistent under insert and remove
/// * Eager pruning of branches that no longer lead to a word
/// * Deterministic enumeration order (children sorted by code point)
/// * Immutable keypad layout injected at construction
#[derive(Debug, Clone, Default)]
pub struct WordTrie {
    /// The root node, representing the empty prefix
    root: TrieNode,

    /// Digit-to-letters table used by digit and fuzzy search
    keypad: KeypadLayout,
}

impl WordTrie {
    /// Creates a new empty `WordTrie` with the standard keypad layout.
    pub fn new() -> Self {
        Self::with_keypad(KeypadLayout::standard())
    }

    /// Creates a new empty `WordTrie` that searches digits with `keypad`.
    pub fn with_keypad(keypad: KeypadLayout) -> Self {
        Self {
            root: TrieNode::new(),
            keypad,
        }
    }

    /// The keypad layout this trie was built with.
    pub fn keypad(&self) -> &KeypadLayout {
        &self.keypad
    }

    /// Inserts `word` with usage frequency `freq`.
    ///
    /// Re-inserting an existing word replaces its frequency; every prefix
    /// aggregate on the path moves by the difference.
    ///
    /// # Returns
    ///
    /// `false` if nothing was stored: an empty word, a zero frequency, or a
    /// frequency that would push the dictionary total past `u64::MAX`. The
    /// trie is untouched in every such case.
    pub fn insert(&mut self, word: &str, freq: u64) -> bool {
        if word.is_empty() || freq == 0 {
            debug!(word, freq, "ignoring insert of empty word or zero frequency");
            return false;
        }

        let old = self.get_frequency(word);

        // The root carries the largest aggregate on any path
        if (self.root.prefix_frequency - old).checked_add(freq).is_none() {
            warn!(word, freq, "refusing insert that overflows the frequency total");
            return false;
        }

        let mut node = &mut self.root;
        node.prefix_frequency = node.prefix_frequency - old + freq;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
            node.prefix_frequency = node.prefix_frequency - old + freq;
        }

        node.is_terminal = true;
        node.frequency = freq;
        true
    }

    /// Removes `word` from the trie.
    ///
    /// # Returns
    ///
    /// `true` if the word was stored and is now gone, `false` if it was not
    /// stored (the trie is left untouched).
    pub fn remove(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        match Self::remove_recursive(&mut self.root, &chars) {
            Some(freq) => {
                debug!(word, freq, "removed word");
                true
            }
            None => false,
        }
    }

    /// Clears the terminal at the end of `chars` and unwinds the path,
    /// subtracting the removed frequency and pruning children left dead.
    ///
    /// Returns the removed frequency, or `None` if no word ends there.
    fn remove_recursive(node: &mut TrieNode, chars: &[char]) -> Option<u64> {
        let removed = match chars.split_first() {
            None => {
                if !node.is_terminal {
                    return None;
                }
                let freq = node.frequency;
                node.is_terminal = false;
                node.frequency = 0;
                freq
            }
            Some((c, rest)) => {
                let child = node.children.get_mut(c)?;
                let freq = Self::remove_recursive(child, rest)?;
                if child.is_dead() {
                    node.children.remove(c);
                }
                freq
            }
        };

        node.prefix_frequency -= removed;
        Some(removed)
    }

    /// Sets the frequency of an existing word.
    ///
    /// The update is applied in one pass along the word's path, so there is
    /// no intermediate state in which the word is missing.
    ///
    /// # Returns
    ///
    /// `false` if `new_freq` is zero, the word is not stored, or the new
    /// frequency would overflow the dictionary total.
    pub fn modify(&mut self, word: &str, new_freq: u64) -> bool {
        if new_freq == 0 || !self.contains(word) {
            return false;
        }
        self.insert(word, new_freq)
    }

    /// Discards every word, leaving a single empty root.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        debug!("cleared trie");
    }

    /// Frequency of `word`, or 0 if it is not stored.
    pub fn get_frequency(&self, word: &str) -> u64 {
        match self.find_node(word) {
            Some(node) if node.is_terminal => node.frequency,
            _ => 0,
        }
    }

    /// Sum of the frequencies of every stored word starting with `prefix`.
    ///
    /// The empty prefix yields the total frequency of the dictionary.
    pub fn get_prefix_frequency(&self, prefix: &str) -> u64 {
        self.find_node(prefix)
            .map_or(0, |node| node.prefix_frequency)
    }

    /// Whether `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(|node| node.is_terminal)
    }

    /// Number of distinct stored words.
    ///
    /// This walks the whole tree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_terminal {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Flat `word -> frequency` map of every stored word.
    pub fn to_map(&self) -> BTreeMap<String, u64> {
        self.search_all()
            .into_iter()
            .map(|entry| (entry.word, entry.frequency))
            .collect()
    }

    /// Inserts every `(word, frequency)` pair.
    ///
    /// Existing words take the new frequency, exactly as [`WordTrie::insert`].
    /// Returns the number of pairs refused by `insert`.
    pub fn from_map<I, K>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, u64)>,
        K: AsRef<str>,
    {
        let mut count = 0usize;
        let mut refused = 0usize;
        for (word, freq) in entries {
            if self.insert(word.as_ref(), freq) {
                count += 1;
            } else {
                refused += 1;
            }
        }
        debug!(count, refused, "loaded entries into trie");
        refused
    }

    /// Follows `prefix` from the root.
    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

impl<K: AsRef<str>> FromIterator<(K, u64)> for WordTrie {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut trie = Self::new();
        let refused = trie.from_map(iter);
        if refused > 0 {
            warn!(refused, "dropped entries while collecting a trie");
        }
        trie
    }
}

impl Serialize for WordTrie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.search_all()
                .into_iter()
                .map(|entry| (entry.word, entry.frequency)),
        )
    }
}

impl<'de> Deserialize<'de> for WordTrie {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, u64>::deserialize(deserializer)?;
        let mut trie = Self::new();
        for (word, freq) in entries {
            if !trie.insert(&word, freq) {
                return Err(D::Error::custom(format!(
                    "cannot store '{word}' with frequency {freq}"
                )));
            }
        }
        Ok(trie)
    }
}
