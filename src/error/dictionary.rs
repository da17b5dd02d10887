//! Dictionary action error module.
//!
//! Each variant is the failure message a user sees for one dictionary action.

use thiserror::Error;

use super::store::StoreError;
use crate::data_structures::WordTrieError;

/// Reasons a dictionary action was rejected or found nothing.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word to add was empty.
    #[error("word must not be empty")]
    EmptyWord,

    /// A frequency of zero or below was supplied to add.
    #[error("frequency must be positive, got {0}")]
    NonPositiveFrequency(i64),

    /// The word to add is already stored.
    #[error("already exists, freq={freq}")]
    AlreadyExists {
        /// The word that was offered
        word: String,
        /// Its stored frequency
        freq: u64,
    },

    /// The word to delete is not stored.
    #[error("not found: {0}")]
    NotFound(String),

    /// Modify was given a missing word or a non-positive frequency.
    #[error("failed: {0} missing or freq≤0")]
    ModifyFailed(String),

    /// The frequencies stored would sum past the largest representable total.
    #[error("frequency total would exceed {}", u64::MAX)]
    TotalOverflow,

    /// Bulk loading refused some entries; nothing was replaced.
    #[error("{0} entries could not be stored: empty word, zero frequency, or total overflow")]
    EntriesRefused(usize),

    /// A keypad lookup with no digits.
    #[error("digits must not be empty")]
    EmptyDigits,

    /// A keypad lookup that reached no letters.
    #[error("no word")]
    NoWord,

    /// A prefix, pattern, or fuzzy lookup that matched nothing.
    #[error("no matches")]
    NoMatches,

    /// A keypad lookup with an illegal digit, shown after the lines traced
    /// for the digits before it.
    #[error("{}", digit_failure(.0))]
    InvalidDigit(#[from] WordTrieError),

    /// Import or export failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn digit_failure(error: &WordTrieError) -> String {
    let WordTrieError::InvalidDigit { partial, .. } = error;
    partial
        .iter()
        .map(ToString::to_string)
        .chain(std::iter::once(error.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}
