// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keypad digit search and fuzzy keypad search.
//!
//! Digit search expands a breadth-first frontier one key press at a time and
//! reports every letter path reachable after each press, so a caller sees
//! the candidates for `2`, `22`, `228` and so on in a single call.
//!
//! Fuzzy search compares the query against the keypad encoding of every
//! stored word and accepts encodings within one substituted digit or one
//! extra or missing trailing digit.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use super::node::TrieNode;
use super::{WordTrie, WordTrieError, WordTrieResult};

/// Largest keypad distance accepted by fuzzy search.
pub const FUZZY_TOLERANCE: usize = 1;

/// A letter path reached by a run of key presses, displayed as
/// `"digits path"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitMatch {
    /// The key presses consumed so far
    pub digits: String,

    /// The letters spelled along the trie
    pub path: String,
}

impl fmt::Display for DigitMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.digits, self.path)
    }
}

impl WordTrie {
    /// Traces a keypad digit sequence through the trie.
    ///
    /// After each digit, every path reachable by pressing the digits so far
    /// is reported once, tagged with that digit prefix. Paths need not be
    /// complete words. Results are grouped by digit count, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`WordTrieError::InvalidDigit`] for the first character that
    /// is not a key of the keypad layout. The matches for the digits before
    /// it travel with the error; later digits are not processed.
    pub fn search_by_digits_detailed(&self, digits: &str) -> WordTrieResult<Vec<DigitMatch>> {
        let mut trace = Vec::new();
        let mut consumed = String::with_capacity(digits.len());
        let mut frontier: Vec<(&TrieNode, String)> = vec![(&self.root, String::new())];

        for (position, digit) in digits.chars().enumerate() {
            let Some(letters) = self.keypad.letters_for(digit) else {
                debug!(
                    digits,
                    position,
                    kept = trace.len(),
                    "digit search stopped at illegal digit"
                );
                return Err(WordTrieError::InvalidDigit {
                    digit,
                    position,
                    partial: trace,
                });
            };
            consumed.push(digit);

            let mut next = Vec::with_capacity(frontier.len());
            for (node, path) in &frontier {
                for letter in letters {
                    if let Some(child) = node.children.get(letter) {
                        let mut reached = path.clone();
                        reached.push(*letter);
                        next.push((child, reached));
                    }
                }
            }

            trace.extend(next.iter().map(|(_, path)| DigitMatch {
                digits: consumed.clone(),
                path: path.clone(),
            }));
            frontier = next;
        }

        debug!(digits, matches = trace.len(), "digit search finished");
        Ok(trace)
    }

    /// Words whose keypad encoding is within [`FUZZY_TOLERANCE`] of `digits`.
    ///
    /// Words are grouped by encoding; groups are visited in encoding order
    /// and words inside a group in enumeration order. Characters with no key
    /// are dropped before comparison.
    pub fn fuzzy_search(&self, digits: &str) -> Vec<String> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in self.search_all() {
            groups
                .entry(self.keypad.encode(&entry.word))
                .or_default()
                .push(entry.word);
        }

        let candidates: Vec<String> = groups
            .into_iter()
            .filter(|(encoding, _)| {
                keypad_distance(encoding, digits).is_some_and(|d| d <= FUZZY_TOLERANCE)
            })
            .flat_map(|(_, words)| words)
            .collect();

        debug!(digits, candidates = candidates.len(), "fuzzy search finished");
        candidates
    }
}

/// Position-wise distance between two digit sequences.
///
/// Counts mismatches over the common leading length and adds the length
/// difference. Returns `None` when the lengths differ by more than
/// [`FUZZY_TOLERANCE`]. Insertions or deletions before the end are not
/// realigned, so `"2468"` and `"268"` are three apart.
pub fn keypad_distance(encoding: &str, query: &str) -> Option<usize> {
    let gap = encoding.chars().count().abs_diff(query.chars().count());
    if gap > FUZZY_TOLERANCE {
        return None;
    }

    let mismatches = encoding
        .chars()
        .zip(query.chars())
        .filter(|(a, b)| a != b)
        .count();
    Some(mismatches + gap)
}
