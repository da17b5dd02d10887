//! Dictionary actions.
//!
//! [`Dictionary`] is the layer user-facing front ends talk to. It owns a
//! [`WordTrie`], enforces the preconditions of each action (no duplicate
//! adds, positive frequencies, non-empty digit queries), and turns results
//! into [`Outcome`]s whose `Display` is the message shown to the user.
//! Rejections are [`DictionaryError`]s, whose `Display` is the failure
//! message.

pub mod store;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::data_structures::{DigitMatch, KeypadLayout, WordEntry, WordTrie};
use crate::error::dictionary::DictionaryError;

/// Result type for dictionary actions.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// The successful result of a dictionary action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new word was stored.
    Added {
        /// The stored word
        word: String,
        /// Its frequency
        freq: u64,
    },

    /// A word was removed.
    Deleted(String),

    /// A word's frequency changed.
    Modified {
        /// The updated word
        word: String,
        /// Its new frequency
        freq: u64,
    },

    /// Per-digit keypad trace, one line per reachable path.
    Trace(Vec<DigitMatch>),

    /// Words with frequencies.
    Entries(Vec<WordEntry>),

    /// Bare words.
    Words(Vec<String>),

    /// A dictionary file replaced the contents.
    Imported {
        /// The file read
        path: PathBuf,
        /// Number of words loaded
        count: usize,
    },

    /// The contents were written to a file.
    Exported {
        /// The file written
        path: PathBuf,
        /// Number of words written
        count: usize,
    },
}

impl Outcome {
    /// The lines this outcome prints as.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Trace(trace) => trace.iter().map(ToString::to_string).collect(),
            Self::Entries(entries) => entries.iter().map(ToString::to_string).collect(),
            Self::Words(words) => words.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { word, freq } => write!(f, "added, word={word}, freq={freq}"),
            Self::Deleted(word) => write!(f, "deleted: {word}"),
            Self::Modified { word, freq } => write!(f, "modified: {word} freq={freq}"),
            Self::Imported { path, count } => {
                write!(f, "import succeeded: {count} words from {}", path.display())
            }
            Self::Exported { path, count } => {
                write!(f, "export succeeded: {count} words to {}", path.display())
            }
            Self::Trace(_) | Self::Entries(_) | Self::Words(_) => {
                write!(f, "{}", self.lines().join("\n"))
            }
        }
    }
}

/// A word dictionary with user-level actions.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    trie: WordTrie,
}

impl Dictionary {
    /// Creates an empty dictionary on the standard keypad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty dictionary that searches digits with `keypad`.
    pub fn with_keypad(keypad: KeypadLayout) -> Self {
        Self {
            trie: WordTrie::with_keypad(keypad),
        }
    }

    /// The underlying trie.
    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }

    /// Adds a new word.
    ///
    /// Unlike [`WordTrie::insert`], an existing word is never overwritten.
    pub fn add(&mut self, word: &str, freq: i64) -> DictionaryResult<Outcome> {
        if word.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }
        let freq = positive(freq).ok_or(DictionaryError::NonPositiveFrequency(freq))?;

        let existing = self.trie.get_frequency(word);
        if existing > 0 {
            debug!(word, existing, "rejecting duplicate add");
            return Err(DictionaryError::AlreadyExists {
                word: word.to_string(),
                freq: existing,
            });
        }

        if !self.trie.insert(word, freq) {
            return Err(DictionaryError::TotalOverflow);
        }
        Ok(Outcome::Added {
            word: word.to_string(),
            freq,
        })
    }

    /// Deletes a word.
    pub fn delete(&mut self, word: &str) -> DictionaryResult<Outcome> {
        if self.trie.remove(word) {
            Ok(Outcome::Deleted(word.to_string()))
        } else {
            Err(DictionaryError::NotFound(word.to_string()))
        }
    }

    /// Changes the frequency of an existing word.
    pub fn modify(&mut self, word: &str, freq: i64) -> DictionaryResult<Outcome> {
        let freq = match positive(freq) {
            Some(freq) if self.trie.contains(word) => freq,
            _ => return Err(DictionaryError::ModifyFailed(word.to_string())),
        };
        if !self.trie.modify(word, freq) {
            return Err(DictionaryError::TotalOverflow);
        }
        Ok(Outcome::Modified {
            word: word.to_string(),
            freq,
        })
    }

    /// Keypad lookup, reporting reachable paths after each digit.
    pub fn t9(&self, digits: &str) -> DictionaryResult<Outcome> {
        if digits.is_empty() {
            return Err(DictionaryError::EmptyDigits);
        }
        let trace = self.trie.search_by_digits_detailed(digits)?;
        if trace.is_empty() {
            return Err(DictionaryError::NoWord);
        }
        Ok(Outcome::Trace(trace))
    }

    /// Words starting with `prefix`.
    pub fn prefix(&self, prefix: &str) -> DictionaryResult<Outcome> {
        non_empty(self.trie.search_by_prefix(prefix)).map(Outcome::Entries)
    }

    /// Words matching a `?` / `*` glob.
    pub fn pattern(&self, pattern: &str) -> DictionaryResult<Outcome> {
        non_empty(self.trie.regex_search(pattern)).map(Outcome::Words)
    }

    /// Words whose keypad encoding is within one digit of `digits`.
    pub fn fuzzy(&self, digits: &str) -> DictionaryResult<Outcome> {
        non_empty(self.trie.fuzzy_search(digits)).map(Outcome::Words)
    }

    /// Every word with its frequency. Never fails; may be empty.
    pub fn list(&self) -> Outcome {
        Outcome::Entries(self.trie.search_all())
    }

    /// Frequency of one word, 0 if absent.
    pub fn frequency(&self, word: &str) -> u64 {
        self.trie.get_frequency(word)
    }

    /// Total frequency of the words sharing `prefix`.
    pub fn prefix_frequency(&self, prefix: &str) -> u64 {
        self.trie.get_prefix_frequency(prefix)
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether no words are stored.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.trie.clear();
    }

    /// Replaces the contents with those of a dictionary file.
    ///
    /// The file is fully parsed before anything is cleared, so a failed
    /// import leaves the dictionary as it was.
    pub fn import(&mut self, path: &Path) -> DictionaryResult<Outcome> {
        let entries = store::load(path)?;
        let count = entries.len();
        self.load_entries(entries)?;

        info!(path = %path.display(), count, "imported dictionary");
        Ok(Outcome::Imported {
            path: path.to_path_buf(),
            count,
        })
    }

    /// Writes the contents to a dictionary file.
    pub fn export(&self, path: &Path, pretty: bool) -> DictionaryResult<Outcome> {
        let entries = self.trie.to_map();
        store::save(path, &entries, pretty)?;

        info!(path = %path.display(), count = entries.len(), "exported dictionary");
        Ok(Outcome::Exported {
            path: path.to_path_buf(),
            count: entries.len(),
        })
    }

    /// Replaces the contents with `entries` without touching the filesystem.
    ///
    /// The entries are loaded into a fresh trie first, so on failure the
    /// dictionary keeps its previous contents.
    pub fn load_entries<I, K>(&mut self, entries: I) -> DictionaryResult<()>
    where
        I: IntoIterator<Item = (K, u64)>,
        K: AsRef<str>,
    {
        let mut trie = WordTrie::with_keypad(self.trie.keypad().clone());
        let refused = trie.from_map(entries);
        if refused > 0 {
            return Err(DictionaryError::EntriesRefused(refused));
        }
        self.trie = trie;
        Ok(())
    }
}

fn positive(freq: i64) -> Option<u64> {
    u64::try_from(freq).ok().filter(|&f| f > 0)
}

fn non_empty<T>(results: Vec<T>) -> DictionaryResult<Vec<T>> {
    if results.is_empty() {
        Err(DictionaryError::NoMatches)
    } else {
        Ok(results)
    }
}
