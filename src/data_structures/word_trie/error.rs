//! Error types for the word trie.
//!
//! Most trie operations report absence through sentinels (`false`, `0`, empty
//! results). The types here cover the cases that carry a diagnostic.

use super::digits::DigitMatch;

/// Errors that can occur in word trie queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordTrieError {
    /// A digit sequence contained a character that is not a keypad key.
    ///
    /// Digits before it were still traced; their matches are kept in
    /// `partial` and no later digit is processed.
    #[error("illegal digit '{digit}' at position {position}; enter a sequence of keypad digits")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Zero-based character position in the query.
        position: usize,
        /// Matches reported for the digits before `position`.
        partial: Vec<DigitMatch>,
    },
}

/// Errors raised while building a custom keypad layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeypadError {
    /// A key that is not an ASCII digit.
    #[error("keypad key '{0}' is not a digit")]
    InvalidKey(char),

    /// The same key was listed twice.
    #[error("keypad key '{0}' is defined more than once")]
    DuplicateKey(char),

    /// A key with no letters.
    #[error("keypad key '{0}' has no letters")]
    EmptyKey(char),

    /// A letter reachable from two keys.
    #[error("letter '{letter}' is assigned to both '{first}' and '{second}'")]
    AmbiguousLetter {
        /// The duplicated letter.
        letter: char,
        /// The key that claimed it first.
        first: char,
        /// The key that claimed it again.
        second: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WordTrieError::InvalidDigit {
            digit: '1',
            position: 2,
            partial: Vec::new(),
        };
        assert_eq!(
            err.to_string(),
            "illegal digit '1' at position 2; enter a sequence of keypad digits"
        );

        let err = KeypadError::InvalidKey('x');
        assert_eq!(err.to_string(), "keypad key 'x' is not a digit");

        let err = KeypadError::AmbiguousLetter { letter: 'a', first: '2', second: '3' };
        assert_eq!(err.to_string(), "letter 'a' is assigned to both '2' and '3'");
    }
}
