// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Telephone keypad layout used by digit and fuzzy search.
//!
//! A [`KeypadLayout`] is an immutable table mapping digit keys to ordered
//! letter sets. The trie receives one at construction and never mutates it.

use std::collections::BTreeMap;

use super::error::KeypadError;

/// The standard telephone keypad (ITU E.161 letter assignment).
pub const STANDARD_LAYOUT: [(char, &str); 8] = [
    ('2', "abc"),
    ('3', "def"),
    ('4', "ghi"),
    ('5', "jkl"),
    ('6', "mno"),
    ('7', "pqrs"),
    ('8', "tuv"),
    ('9', "wxyz"),
];

/// Digit-to-letters table with a reverse index for encoding words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadLayout {
    /// Letters per digit key, in key order
    keys: BTreeMap<char, Vec<char>>,

    /// Reverse lookup from letter to the key carrying it
    letter_keys: BTreeMap<char, char>,
}

impl KeypadLayout {
    /// Creates the standard 2–9 keypad layout.
    pub fn standard() -> Self {
        let mut keys = BTreeMap::new();
        let mut letter_keys = BTreeMap::new();
        for (digit, letters) in STANDARD_LAYOUT {
            for letter in letters.chars() {
                letter_keys.insert(letter, digit);
            }
            keys.insert(digit, letters.chars().collect());
        }
        Self { keys, letter_keys }
    }

    /// Builds a custom layout from `(digit, letters)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`KeypadError`] if a key is not an ASCII digit, a key appears
    /// twice, a key has no letters, or a letter is assigned to two keys.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, KeypadError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: AsRef<str>,
    {
        let mut keys = BTreeMap::new();
        let mut letter_keys = BTreeMap::new();

        for (digit, letters) in pairs {
            if !digit.is_ascii_digit() {
                return Err(KeypadError::InvalidKey(digit));
            }
            if keys.contains_key(&digit) {
                return Err(KeypadError::DuplicateKey(digit));
            }

            let letters: Vec<char> = letters.as_ref().chars().collect();
            if letters.is_empty() {
                return Err(KeypadError::EmptyKey(digit));
            }
            for &letter in &letters {
                if let Some(&first) = letter_keys.get(&letter) {
                    return Err(KeypadError::AmbiguousLetter {
                        letter,
                        first,
                        second: digit,
                    });
                }
                letter_keys.insert(letter, digit);
            }
            keys.insert(digit, letters);
        }

        Ok(Self { keys, letter_keys })
    }

    /// Letters carried by `digit`, or `None` if the key does not exist.
    pub fn letters_for(&self, digit: char) -> Option<&[char]> {
        self.keys.get(&digit).map(Vec::as_slice)
    }

    /// The key that carries `letter`, if any.
    pub fn digit_for(&self, letter: char) -> Option<char> {
        self.letter_keys.get(&letter).copied()
    }

    /// Whether `digit` is a key of this layout.
    pub fn contains_digit(&self, digit: char) -> bool {
        self.keys.contains_key(&digit)
    }

    /// Encodes a word as the digit sequence that types it.
    ///
    /// Characters no key carries are dropped from the encoding, so `"a-b"`
    /// encodes to `"22"` on the standard layout.
    pub fn encode(&self, word: &str) -> String {
        word.chars().filter_map(|c| self.digit_for(c)).collect()
    }

    /// Iterates over `(digit, letters)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[char])> {
        self.keys.iter().map(|(&digit, letters)| (digit, letters.as_slice()))
    }
}

impl Default for KeypadLayout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("cat", "228" ; "lowercase word")]
    #[test_case("home", "4663" ; "all on distinct keys")]
    #[test_case("good", "4663" ; "same keys as home")]
    #[test_case("it's", "487" ; "apostrophe dropped")]
    #[test_case("Cat", "28" ; "uppercase is not on any key")]
    #[test_case("", "" ; "empty word")]
    fn test_standard_encoding(word: &str, expected: &str) {
        assert_eq!(KeypadLayout::standard().encode(word), expected);
    }

    #[test]
    fn test_standard_lookup() {
        let keypad = KeypadLayout::standard();
        assert_eq!(keypad.letters_for('7'), Some(&['p', 'q', 'r', 's'][..]));
        assert_eq!(keypad.letters_for('1'), None);
        assert_eq!(keypad.digit_for('z'), Some('9'));
        assert_eq!(keypad.digit_for('!'), None);
        assert!(keypad.contains_digit('2'));
        assert!(!keypad.contains_digit('0'));
        assert_eq!(keypad.iter().count(), 8);
    }

    #[test]
    fn test_custom_layout() {
        let keypad = KeypadLayout::from_pairs([('1', "xy"), ('0', "z")]).unwrap();
        assert_eq!(keypad.encode("zxy"), "011");
        assert_eq!(keypad.iter().map(|(d, _)| d).collect::<String>(), "01");
    }

    #[test]
    fn test_custom_layout_rejects_bad_tables() {
        assert!(matches!(
            KeypadLayout::from_pairs([('a', "bc")]),
            Err(KeypadError::InvalidKey('a'))
        ));
        assert!(matches!(
            KeypadLayout::from_pairs([('2', "ab"), ('2', "cd")]),
            Err(KeypadError::DuplicateKey('2'))
        ));
        assert!(matches!(
            KeypadLayout::from_pairs([('2', "")]),
            Err(KeypadError::EmptyKey('2'))
        ));
        assert!(matches!(
            KeypadLayout::from_pairs([('2', "ab"), ('3', "bc")]),
            Err(KeypadError::AmbiguousLetter { letter: 'b', first: '2', second: '3' })
        ));
    }
}
