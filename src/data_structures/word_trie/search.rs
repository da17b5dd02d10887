//! Enumeration and glob pattern search over the word trie.

use std::fmt;

use fnv::FnvHashSet;
use tracing::debug;

use super::node::TrieNode;
use super::WordTrie;

/// Pattern character matching exactly one character.
pub const SINGLE_WILDCARD: char = '?';

/// Pattern character matching zero or more characters.
pub const MULTI_WILDCARD: char = '*';

/// A stored word with its frequency, displayed as `"word frequency"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordEntry {
    /// The stored word
    pub word: String,

    /// Its usage frequency
    pub frequency: u64,
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.frequency)
    }
}

impl WordTrie {
    /// Every stored word with its frequency, in code point order.
    pub fn search_all(&self) -> Vec<WordEntry> {
        collect_words(&self.root, String::new())
    }

    /// Every stored word starting with `prefix`, including `prefix` itself if
    /// it is a word. Empty if no stored word has that prefix.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<WordEntry> {
        match self.find_node(prefix) {
            Some(node) => collect_words(node, prefix.to_string()),
            None => Vec::new(),
        }
    }

    /// Words matching a glob `pattern` as a whole.
    ///
    /// `?` matches exactly one character and `*` matches any run of
    /// characters, including none. Every other character matches itself.
    ///
    /// Each `(path, pattern index)` state is expanded once, which bounds the
    /// work on patterns with many `*` and reports every word at most once.
    pub fn regex_search(&self, pattern: &str) -> Vec<String> {
        let pattern: Vec<char> = pattern.chars().collect();
        let mut matches = Vec::new();
        let mut visited: FnvHashSet<(String, usize)> = FnvHashSet::default();
        let mut stack: Vec<(&TrieNode, usize, String)> = vec![(&self.root, 0, String::new())];

        while let Some((node, index, path)) = stack.pop() {
            if !visited.insert((path.clone(), index)) {
                continue;
            }

            let Some(&token) = pattern.get(index) else {
                if node.is_terminal {
                    matches.push(path);
                }
                continue;
            };

            match token {
                SINGLE_WILDCARD => {
                    for (&c, child) in node.children.iter().rev() {
                        stack.push((child, index + 1, extend(&path, c)));
                    }
                }
                MULTI_WILDCARD => {
                    // One more character absorbed by the wildcard
                    for (&c, child) in node.children.iter().rev() {
                        stack.push((child, index, extend(&path, c)));
                    }
                    // Wildcard done; popped first
                    stack.push((node, index + 1, path));
                }
                literal => {
                    if let Some(child) = node.children.get(&literal) {
                        stack.push((child, index + 1, extend(&path, literal)));
                    }
                }
            }
        }

        debug!(states = visited.len(), matches = matches.len(), "pattern search finished");
        matches
    }
}

/// Pre-order walk below `start`, children in key order.
fn collect_words(start: &TrieNode, prefix: String) -> Vec<WordEntry> {
    let mut words = Vec::new();
    let mut stack = vec![(start, prefix)];

    while let Some((node, path)) = stack.pop() {
        if node.is_terminal {
            words.push(WordEntry {
                word: path.clone(),
                frequency: node.frequency,
            });
        }
        for (&c, child) in node.children.iter().rev() {
            stack.push((child, extend(&path, c)));
        }
    }

    words
}

fn extend(path: &str, c: char) -> String {
    let mut next = String::with_capacity(path.len() + c.len_utf8());
    next.push_str(path);
    next.push(c);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use test_case::test_case;

    fn trie_of(words: &[(&str, u64)]) -> WordTrie {
        words.iter().copied().collect()
    }

    fn set(words: Vec<String>) -> BTreeSet<String> {
        words.into_iter().collect()
    }

    #[test]
    fn test_search_all_is_ordered_preorder() {
        let trie = trie_of(&[("cat", 1), ("car", 4), ("ca", 2), ("dog", 3), ("b", 5)]);
        let listed: Vec<String> = trie.search_all().iter().map(ToString::to_string).collect();
        assert_eq!(listed, vec!["b 5", "ca 2", "car 4", "cat 1", "dog 3"]);
    }

    #[test]
    fn test_search_all_empty() {
        assert!(WordTrie::new().search_all().is_empty());
    }

    #[test]
    fn test_trie_prefix_search() {
        let trie = trie_of(&[("apple", 1), ("application", 2), ("apply", 3), ("banana", 4)]);

        let results = trie.search_by_prefix("app");
        let words: Vec<&str> = results.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["apple", "application", "apply"]);

        // A prefix that is itself a word is included
        let results = trie.search_by_prefix("apply");
        assert_eq!(results, vec![WordEntry { word: "apply".into(), frequency: 3 }]);

        // Test with no matches
        assert!(trie.search_by_prefix("orange").is_empty());

        // Empty prefix lists everything
        assert_eq!(trie.search_by_prefix(""), trie.search_all());
    }

    #[test]
    fn test_single_wildcard() {
        let trie = trie_of(&[("cat", 1), ("cut", 2), ("cot", 3), ("car", 4)]);
        assert_eq!(
            set(trie.regex_search("c?t")),
            set(vec!["cat".into(), "cut".into(), "cot".into()])
        );
    }

    #[test]
    fn test_multi_wildcard() {
        let trie = trie_of(&[("ct", 1), ("cat", 2), ("cart", 3), ("cats", 4), ("at", 5)]);
        assert_eq!(
            set(trie.regex_search("c*t")),
            set(vec!["ct".into(), "cat".into(), "cart".into()])
        );
    }

    #[test_case("*", &["a", "ab", "abc", "b"] ; "star matches everything")]
    #[test_case("a*", &["a", "ab", "abc"] ; "trailing star")]
    #[test_case("*c", &["abc"] ; "leading star")]
    #[test_case("**b", &["ab", "b"] ; "repeated star")]
    #[test_case("?", &["a", "b"] ; "single char words")]
    #[test_case("??", &["ab"] ; "two char words")]
    #[test_case("a?*", &["ab", "abc"] ; "at least two chars")]
    #[test_case("abc", &["abc"] ; "literal")]
    #[test_case("abcd", &[] ; "longer than any word")]
    #[test_case("", &[] ; "empty pattern")]
    fn test_glob_patterns(pattern: &str, expected: &[&str]) {
        let trie = trie_of(&[("a", 1), ("ab", 2), ("abc", 3), ("b", 4)]);
        let found = trie.regex_search(pattern);
        assert_eq!(found.len(), expected.len(), "duplicates or misses for {pattern:?}");
        let expected: BTreeSet<String> = expected.iter().map(|s| s.to_string()).collect();
        assert_eq!(set(found), expected);
    }

    #[test]
    fn test_many_stars_stay_tractable() {
        let words: Vec<(String, u64)> = (0..200).map(|i| (format!("w{i:03}"), 1)).collect();
        let trie: WordTrie = words.into_iter().collect();
        let found = trie.regex_search("*********************1");
        assert_eq!(found.len(), 20);
    }
}
