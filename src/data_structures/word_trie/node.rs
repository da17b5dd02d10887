//! Node implementation for the word trie.
//!
//! Each node owns its children outright. Dropping a node drops its subtree.

use std::collections::BTreeMap;

/// A node in the word trie.
///
/// Each node represents one character of a path from the root. Terminal nodes
/// mark the end of a stored word and carry its frequency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Child nodes keyed by the next character, iterated in code point order
    pub children: BTreeMap<char, TrieNode>,

    /// Usage count of the word ending here (zero unless terminal)
    pub frequency: u64,

    /// Sum of `frequency` over every terminal node in this subtree
    pub prefix_frequency: u64,

    /// Whether a stored word ends at this node
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// A node that no longer carries a word and has nothing below it.
    pub fn is_dead(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&TrieNode> = vec![self];
        while let Some(node) = stack.pop() {
            count += node.children.len();
            stack.extend(node.children.values());
        }
        count
    }
}
